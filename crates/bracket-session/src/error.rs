use thiserror::Error;

/// Errors produced by an elimination session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The initial item list contains the same identifier twice.
    ///
    /// `position` is the index of the second occurrence. Raised only at
    /// construction; a live session can never produce it.
    #[error("duplicate item identifier at position {position} in the initial list")]
    DuplicateItem { position: usize },

    /// `decide` was called with no items left to decide.
    #[error("no items remain to decide")]
    Exhausted,
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SessionError::DuplicateItem { position: 3 };
        assert_eq!(
            err.to_string(),
            "duplicate item identifier at position 3 in the initial list"
        );
        assert_eq!(SessionError::Exhausted.to_string(), "no items remain to decide");
    }
}
