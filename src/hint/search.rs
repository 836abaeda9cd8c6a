//! Two-tier greedy hint search.
//!
//! Candidates are visited source column ascending, then card index
//! ascending, then target column ascending. The first candidate accepted
//! by a tier wins, so the result is deterministic for a given state.

use tracing::{instrument, trace};

use super::{Hint, HintMove, HintTier};
use crate::core::{Column, GameState};
use crate::rules::{can_move_cards, is_valid_sequence};

/// Suggest the next action for `state`.
#[instrument(skip(state), fields(moves = state.moves()))]
pub fn find_hint(state: &GameState) -> Hint {
    for tier in [HintTier::SameSuit, HintTier::AnyTarget] {
        if let Some(mv) = first_move(state, tier) {
            trace!(?mv, "hint found");
            return Hint::Move(mv);
        }
    }

    if state.stock_pile_count() > 0 {
        Hint::DealFromStock
    } else {
        Hint::NoMoves
    }
}

fn first_move(state: &GameState, tier: HintTier) -> Option<HintMove> {
    let columns = state.columns();

    for (source_column, source) in columns.iter().enumerate() {
        for card_index in 0..source.len() {
            if !is_valid_sequence(source, card_index) {
                continue;
            }
            let target = columns
                .iter()
                .enumerate()
                .filter(|&(target_column, _)| target_column != source_column)
                .find(|(_, target)| accepts(source, card_index, target, tier));

            if let Some((target_column, _)) = target {
                return Some(HintMove {
                    source_column,
                    card_index,
                    target_column,
                    tier,
                });
            }
        }
    }

    None
}

/// Whether `tier` accepts moving `source[start..]` onto `target`.
fn accepts(source: &Column, start: usize, target: &Column, tier: HintTier) -> bool {
    let (Some(base), Some(top)) = (source.get(start), target.back()) else {
        return false;
    };
    let suit_ok = match tier {
        HintTier::SameSuit => top.suit == base.suit,
        HintTier::AnyTarget => true,
    };
    suit_ok && can_move_cards(source, start, target)
}
