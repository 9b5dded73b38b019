//! The interactive game loop.
//!
//! The loop is generic over its input and output streams so tests can drive
//! it with scripted keystrokes; `commands::run_play` wires it to stdin and
//! stdout.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use bracket_catalog::{Catalog, Item, ItemId};
use bracket_session::{EliminationSession, Outcome};

/// Outcome of one game run.
#[derive(Debug)]
pub struct PlayResult {
    /// False when the player quit (or input ended) before the last item.
    pub completed: bool,
    /// Accepted items with their display metadata, decision order preserved.
    pub accepted: Vec<Item>,
    pub decided: usize,
    pub total: usize,
}

/// Drive one session until it is terminal or the player quits.
pub fn play(
    catalog: &Catalog,
    mut session: EliminationSession<ItemId>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<PlayResult> {
    let mut lines = input.lines();
    while let Some(id) = session.peek().cloned() {
        let progress = session.progress();
        write!(
            output,
            "[{}/{}] {}\n(a)ccept / (r)eject / (u)ndo / (q)uit> ",
            progress.decided + 1,
            progress.total,
            label(catalog, &id),
        )?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(finish(catalog, &session));
        };
        let line = line.context("read player input")?;
        match line.trim().to_lowercase().as_str() {
            "a" | "accept" | "y" => {
                let record = session.decide(Outcome::Accept)?;
                debug!(item = %record.item, sequence = record.sequence, "accepted");
            }
            "r" | "reject" | "n" => {
                let record = session.decide(Outcome::Reject)?;
                debug!(item = %record.item, sequence = record.sequence, "rejected");
            }
            "u" | "undo" => match session.undo() {
                Some(record) => {
                    writeln!(output, "undid {}", label(catalog, &record.item))?;
                }
                None => writeln!(output, "nothing to undo")?,
            },
            "q" | "quit" => return Ok(finish(catalog, &session)),
            other => {
                writeln!(output, "unrecognized input {other:?}; use a, r, u, or q")?;
            }
        }
    }
    Ok(finish(catalog, &session))
}

fn label(catalog: &Catalog, id: &ItemId) -> String {
    match catalog.get(id) {
        Some(item) => format!("{} ({})", item.name, item.cuisine),
        None => id.to_string(),
    }
}

fn finish(catalog: &Catalog, session: &EliminationSession<ItemId>) -> PlayResult {
    let accepted = session
        .accepted()
        .iter()
        .filter_map(|id| catalog.get(id).cloned())
        .collect();
    let progress = session.progress();
    PlayResult {
        completed: session.is_terminal(),
        accepted,
        decided: progress.decided,
        total: progress.total,
    }
}
