//! Swipe-elimination session state machine.
//!
//! A session owns one linear elimination pass over a fixed set of opaque
//! item identifiers: every `decide` moves the current head item into the
//! accepted or rejected list, and `undo` restores the exact prior state,
//! to unlimited depth. The crate does no I/O and knows nothing about where
//! items come from or where the terminal result goes.

pub mod decision;
pub mod error;
pub mod session;

pub use decision::{Decision, Outcome, Progress};
pub use error::{Result, SessionError};
pub use session::EliminationSession;
