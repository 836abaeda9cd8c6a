//! Completed-run detection and removal.
//!
//! A run is thirteen same-suit face-up cards, King down to Ace, sitting
//! at the top of a column. Runs are lifted off the tableau as soon as they
//! form.

use tracing::info;

use crate::cards::Rank;
use crate::core::{Column, GameConfig, GameState, RUN_LENGTH};

/// Offset of a complete run at the top of `column`, if there is one.
#[must_use]
pub fn check_complete_run(column: &Column) -> Option<usize> {
    let start = column.len().checked_sub(RUN_LENGTH)?;
    let king = column.get(start)?;
    let ace = column.back()?;
    if king.rank != Rank::King || ace.rank != Rank::Ace {
        return None;
    }

    let sealed = column
        .iter()
        .skip(start)
        .zip(column.iter().skip(start + 1))
        .all(|(below, above)| below.accepts_in_sequence(above));
    sealed.then_some(start)
}

/// Remove every complete run from `state`, returning a new state.
///
/// Each removal adds one to the completed-run counter and `run_bonus` to
/// the score, and reveals the column's new top card if it is face-down.
#[must_use]
pub fn remove_complete_runs(state: &GameState, config: &GameConfig) -> GameState {
    let mut next = state.clone();
    remove_runs_in_place(&mut next, config.run_bonus);
    next
}

/// Single pass over columns 0..10 on a state the caller already owns.
///
/// Every column is examined once per call. A removal only touches its own
/// column, and a single move or deal can complete at most one run per
/// column, so one pass catches everything.
pub(crate) fn remove_runs_in_place(state: &mut GameState, run_bonus: i64) -> usize {
    let mut removed = 0;

    for index in 0..state.columns().len() {
        let column = state.column_mut(index);
        let Some(start) = check_complete_run(column) else {
            continue;
        };
        let run = column.split_off(start);
        let suit = run.front().map(|card| card.suit);

        if let Some(suit) = suit {
            state.record_run(suit, run_bonus);
            state.reveal_top(index);
            removed += 1;
            info!(
                column = index,
                ?suit,
                completed = state.completed_runs(),
                "run completed"
            );
        }
    }

    removed
}
