//! Error types for catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON could not be parsed.
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An item identifier is empty or whitespace-only.
    #[error("invalid item identifier {value:?}")]
    InvalidItemId { value: String },

    /// Two catalog entries carry the same identifier.
    #[error("duplicate item identifier {id:?} in catalog")]
    DuplicateId { id: String },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
