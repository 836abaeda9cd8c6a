//! Move legality and application.
//!
//! Inside a sequence cards must share a suit, but any suit may receive a
//! sequence: the only requirement on the target is a face-up top card one
//! rank above the base of the moving sequence, or an empty column.

use tracing::{debug, instrument};

use super::error::MoveError;
use super::runs::remove_runs_in_place;
use super::sequence::is_valid_sequence;
use crate::core::{Action, Column, GameConfig, GameState, COLUMN_COUNT};
use crate::invariants::check_structure;

/// Check whether `source[start..]` may be placed on `target`.
pub fn check_move(source: &Column, start: usize, target: &Column) -> Result<(), MoveError> {
    let Some(base) = source.get(start) else {
        return Err(MoveError::StartOutOfRange {
            start,
            len: source.len(),
        });
    };
    if !is_valid_sequence(source, start) {
        return Err(MoveError::NotASequence { start });
    }

    match target.back() {
        None => Ok(()),
        Some(top) if !top.face_up => Err(MoveError::TargetFaceDown),
        Some(top) if top.rank.is_one_above(base.rank) => Ok(()),
        Some(top) => Err(MoveError::RankMismatch {
            moving: base.rank,
            target: top.rank,
        }),
    }
}

/// True if `source[start..]` may be placed on `target`.
#[must_use]
pub fn can_move_cards(source: &Column, start: usize, target: &Column) -> bool {
    check_move(source, start, target).is_ok()
}

/// Validate a move between two columns of `state`.
pub fn validate_move(
    state: &GameState,
    from: usize,
    start: usize,
    to: usize,
) -> Result<(), MoveError> {
    if from == to {
        return Err(MoveError::SameColumn(from));
    }
    let source = state.column(from).ok_or(MoveError::ColumnOutOfRange(from))?;
    let target = state.column(to).ok_or(MoveError::ColumnOutOfRange(to))?;

    check_move(source, start, target)
}

/// Move `state.columns[from][start..]` onto column `to`.
///
/// On success the new state has the move counter incremented, the move
/// penalty deducted, the source's new top card revealed if it was
/// face-down, and any completed runs removed. On rejection `state` is
/// untouched and the reason is returned.
#[instrument(skip(state, config), fields(moves = state.moves()))]
pub fn move_cards(
    state: &GameState,
    from: usize,
    start: usize,
    to: usize,
    config: &GameConfig,
) -> Result<GameState, MoveError> {
    validate_move(state, from, start, to).inspect_err(|err| debug!(%err, "move rejected"))?;

    let mut next = state.clone();
    let moving = next.column_mut(from).split_off(start);
    next.column_mut(to).append(moving);
    next.record_move(config.move_penalty);
    if next.reveal_top(from) {
        debug!(column = from, "revealed card");
    }
    remove_runs_in_place(&mut next, config.run_bonus);
    debug_assert!(check_structure(&next).is_ok());

    Ok(next)
}

/// Every legal move in search order: source column ascending, then start
/// index ascending, then target column ascending. Includes moves onto
/// empty columns.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Action> {
    let mut moves = Vec::new();

    for (from, source) in state.columns().iter().enumerate() {
        for start in 0..source.len() {
            if !is_valid_sequence(source, start) {
                continue;
            }
            for to in (0..COLUMN_COUNT).filter(|&to| to != from) {
                if can_move_cards(source, start, &state.columns()[to]) {
                    moves.push(Action::Move { from, start, to });
                }
            }
        }
    }

    moves
}
