//! The elimination session state machine.

use std::collections::HashSet;
use std::hash::Hash;

use crate::decision::{Decision, Outcome, Progress};
use crate::error::{Result, SessionError};

/// One linear elimination pass over a closed item set, with unlimited undo.
///
/// The session partitions its initial items into three ordered lists:
/// `remaining` (not yet decided; the head is the item currently up for
/// decision), `accepted`, and `rejected` (both most-recent-last). Every
/// `decide` moves the head of `remaining` into one of the other two lists
/// and records the move in a LIFO history; `undo` pops the history and
/// restores the exact prior state.
///
/// The session is generic over the item identifier type and never inspects
/// item content, only identity. Callers that want a shuffled presentation
/// order must shuffle before construction; the session never reorders.
///
/// All operations are synchronous and the session performs no I/O. Sharing
/// one session across threads requires an external lock around every call.
#[derive(Debug, Clone)]
pub struct EliminationSession<I> {
    remaining: Vec<I>,
    accepted: Vec<I>,
    rejected: Vec<I>,
    history: Vec<Decision<I>>,
    total: usize,
    next_sequence: u64,
}

/// Equality covers the observable state: the three partitions, the
/// still-applied history, and the fixed total. The sequence counter is
/// excluded on purpose: ordinals are never reused, so undoing a decision
/// restores every list exactly but does not rewind the counter.
impl<I: PartialEq> PartialEq for EliminationSession<I> {
    fn eq(&self, other: &Self) -> bool {
        self.total == other.total
            && self.remaining == other.remaining
            && self.accepted == other.accepted
            && self.rejected == other.rejected
            && self.history == other.history
    }
}

impl<I: Eq> Eq for EliminationSession<I> {}

impl<I> EliminationSession<I>
where
    I: Eq + Hash + Clone,
{
    /// Create a session over the given items, in the given order.
    ///
    /// An empty list is legal and yields an immediately terminal session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateItem`] if the same identifier occurs
    /// twice; duplicates are a caller programming error and are rejected
    /// here rather than propagated into the partition lists.
    pub fn new(items: impl IntoIterator<Item = I>) -> Result<Self> {
        let remaining: Vec<I> = items.into_iter().collect();
        let mut seen: HashSet<&I> = HashSet::with_capacity(remaining.len());
        for (position, item) in remaining.iter().enumerate() {
            if !seen.insert(item) {
                return Err(SessionError::DuplicateItem { position });
            }
        }
        let total = remaining.len();
        Ok(Self {
            remaining,
            accepted: Vec::new(),
            rejected: Vec::new(),
            history: Vec::new(),
            total,
            next_sequence: 1,
        })
    }

    /// Decide the head of `remaining`, moving it into the accepted or
    /// rejected list and recording the move in the history.
    ///
    /// Returns the recorded decision.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Exhausted`] if the session is terminal. The
    /// check happens before any mutation, so a failed call leaves the
    /// session completely unchanged.
    pub fn decide(&mut self, outcome: Outcome) -> Result<Decision<I>> {
        if self.remaining.is_empty() {
            return Err(SessionError::Exhausted);
        }
        let item = self.remaining.remove(0);
        match outcome {
            Outcome::Accept => self.accepted.push(item.clone()),
            Outcome::Reject => self.rejected.push(item.clone()),
        }
        let record = Decision {
            item,
            outcome,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.history.push(record.clone());
        Ok(record)
    }

    /// Reverse the most recent decision, restoring the state that existed
    /// immediately before the corresponding `decide` call.
    ///
    /// Returns the undone record, or `None` when there is nothing to undo
    /// (an expected steady state, not an error). Repeated calls unwind
    /// decisions in exact reverse order. There is no redo: a subsequent
    /// `decide` creates a new record with a fresh sequence ordinal.
    pub fn undo(&mut self) -> Option<Decision<I>> {
        let record = self.history.pop()?;
        let bucket = match record.outcome {
            Outcome::Accept => &mut self.accepted,
            Outcome::Reject => &mut self.rejected,
        };
        // Decisions append to the tail of their outcome list and history is
        // LIFO, so the undone item is always that list's tail.
        let item = bucket
            .pop()
            .expect("decision history out of sync with outcome lists");
        debug_assert!(item == record.item, "history tail mismatch on undo");
        self.remaining.insert(0, item);
        Some(record)
    }

    /// The item currently up for decision, if any.
    pub fn peek(&self) -> Option<&I> {
        self.remaining.first()
    }

    /// Items not yet decided, in presentation order.
    pub fn remaining(&self) -> &[I] {
        &self.remaining
    }

    /// Accepted items, most recent decision last.
    pub fn accepted(&self) -> &[I] {
        &self.accepted
    }

    /// Rejected items, most recent decision last.
    pub fn rejected(&self) -> &[I] {
        &self.rejected
    }

    /// Still-applied decisions, oldest first.
    pub fn history(&self) -> &[Decision<I>] {
        &self.history
    }

    /// Whether there is a decision to undo.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether every item has been decided.
    pub fn is_terminal(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Decided count against the total fixed at construction.
    pub fn progress(&self) -> Progress {
        Progress {
            decided: self.total - self.remaining.len(),
            total: self.total,
        }
    }
}
