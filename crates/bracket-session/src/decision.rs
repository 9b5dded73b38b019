//! Decision records and progress counters.

use serde::{Deserialize, Serialize};

/// The two-valued verdict attached to a decision.
///
/// In the original swipe gesture mapping, a right swipe accepts and a left
/// swipe rejects; the session only cares about the verdict, not the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Accept,
    Reject,
}

/// One immutable entry in a session's decision history.
///
/// `sequence` is the order in which decisions were made, starting at 1 and
/// monotonically increasing for the lifetime of the session. Ordinals are
/// never reused: a decision made after an undo gets a fresh ordinal even if
/// it repeats the undone item and outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision<I> {
    pub item: I,
    pub outcome: Outcome,
    pub sequence: u64,
}

/// Progress through a session: how many items have been decided out of the
/// fixed initial total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub decided: usize,
    pub total: usize,
}
