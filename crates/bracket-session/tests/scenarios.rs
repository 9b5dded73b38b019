//! Black-box scenario tests for the elimination session.

use bracket_session::{Decision, EliminationSession, Outcome, Progress, SessionError};

fn session(items: &[&str]) -> EliminationSession<String> {
    EliminationSession::new(items.iter().map(|s| (*s).to_string())).expect("valid item list")
}

#[test]
fn accept_reject_then_undo() {
    let mut s = session(&["A", "B", "C"]);

    s.decide(Outcome::Accept).expect("decide A");
    assert_eq!(s.remaining(), ["B", "C"]);
    assert_eq!(s.accepted(), ["A"]);
    assert_eq!(s.progress(), Progress { decided: 1, total: 3 });

    s.decide(Outcome::Reject).expect("decide B");
    assert_eq!(s.remaining(), ["C"]);
    assert_eq!(s.accepted(), ["A"]);
    assert_eq!(s.rejected(), ["B"]);
    assert_eq!(s.progress(), Progress { decided: 2, total: 3 });

    let undone = s.undo().expect("undo");
    assert_eq!(
        undone,
        Decision {
            item: "B".to_string(),
            outcome: Outcome::Reject,
            sequence: 2,
        }
    );
    assert_eq!(s.remaining(), ["B", "C"]);
    assert_eq!(s.accepted(), ["A"]);
    assert!(s.rejected().is_empty());
    assert_eq!(s.progress(), Progress { decided: 1, total: 3 });
}

#[test]
fn single_item_game_locks_out_after_terminal() {
    let mut s = session(&["X"]);
    s.decide(Outcome::Accept).expect("decide X");
    assert!(s.remaining().is_empty());
    assert_eq!(s.accepted(), ["X"]);
    assert!(s.is_terminal());

    assert_eq!(s.decide(Outcome::Accept), Err(SessionError::Exhausted));
    assert_eq!(s.accepted(), ["X"]);
    assert!(s.rejected().is_empty());
    assert_eq!(s.progress(), Progress { decided: 1, total: 1 });
}

#[test]
fn undo_unwinds_in_reverse_decision_order() {
    let mut s = session(&["C", "A", "B"]);
    s.decide(Outcome::Accept).expect("decide C");
    s.decide(Outcome::Reject).expect("decide A");
    s.decide(Outcome::Accept).expect("decide B");
    assert!(s.is_terminal());

    // Unwinds by decision order, not by item identity or alphabetical order.
    let third = s.undo().expect("undo third");
    assert_eq!((third.item.as_str(), third.sequence), ("B", 3));
    let second = s.undo().expect("undo second");
    assert_eq!((second.item.as_str(), second.sequence), ("A", 2));
    let first = s.undo().expect("undo first");
    assert_eq!((first.item.as_str(), first.sequence), ("C", 1));

    assert_eq!(s.remaining(), ["C", "A", "B"]);
    assert!(s.accepted().is_empty());
    assert!(s.rejected().is_empty());
    assert!(!s.can_undo());
    assert_eq!(s.undo(), None);
}

#[test]
fn full_game_to_terminal_result() {
    let mut s = session(&["pizza", "ramen", "tacos", "bibimbap"]);
    s.decide(Outcome::Reject).expect("decide pizza");
    s.decide(Outcome::Accept).expect("decide ramen");
    s.decide(Outcome::Reject).expect("decide tacos");
    s.decide(Outcome::Accept).expect("decide bibimbap");
    assert!(s.is_terminal());
    assert_eq!(s.accepted(), ["ramen", "bibimbap"]);
    assert_eq!(s.rejected(), ["pizza", "tacos"]);
    assert_eq!(s.history().len(), 4);

    // Terminal sessions still allow undo.
    let undone = s.undo().expect("undo last");
    assert_eq!(undone.item, "bibimbap");
    assert!(!s.is_terminal());
    assert_eq!(s.peek().map(String::as_str), Some("bibimbap"));
}

#[test]
fn integer_identifiers_work_unchanged() {
    let mut s = EliminationSession::new([10u32, 20, 30]).expect("valid item list");
    s.decide(Outcome::Accept).expect("decide 10");
    s.decide(Outcome::Reject).expect("decide 20");
    assert_eq!(s.accepted(), [10]);
    assert_eq!(s.rejected(), [20]);
    assert_eq!(s.remaining(), [30]);
}
