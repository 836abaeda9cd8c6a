//! Stock dealing.
//!
//! A deal takes the last stock pile and places one card face-up on every
//! column. It needs a full pile and no empty column.

use tracing::{debug, instrument};

use super::error::DealError;
use super::runs::remove_runs_in_place;
use crate::core::{GameConfig, GameState, COLUMN_COUNT};
use crate::invariants::check_structure;

/// Check whether `state` allows a deal.
pub fn check_deal(state: &GameState) -> Result<(), DealError> {
    let pile = state.stock().back().ok_or(DealError::StockEmpty)?;
    if let Some(empty) = state.first_empty_column() {
        return Err(DealError::EmptyColumn(empty));
    }
    if pile.len() != COLUMN_COUNT {
        return Err(DealError::PartialPile(pile.len()));
    }
    Ok(())
}

/// True if a deal is currently allowed.
#[must_use]
pub fn can_deal_from_stock(state: &GameState) -> bool {
    check_deal(state).is_ok()
}

/// Deal the last stock pile across the tableau.
///
/// Pile card `i` goes face-up onto column `i`. The move counter goes up by
/// one; the score is unchanged apart from any runs the deal completes.
#[instrument(skip(state, config), fields(piles = state.stock_pile_count()))]
pub fn deal_from_stock(state: &GameState, config: &GameConfig) -> Result<GameState, DealError> {
    check_deal(state).inspect_err(|err| debug!(%err, "deal rejected"))?;

    let mut next = state.clone();
    let pile = next.pop_stock_pile().ok_or(DealError::StockEmpty)?;
    for (index, card) in pile.into_iter().enumerate() {
        next.column_mut(index).push_back(card.flipped_up());
    }
    next.record_deal();
    remove_runs_in_place(&mut next, config.run_bonus);
    debug_assert!(check_structure(&next).is_ok());

    debug!(remaining = next.stock_pile_count(), "dealt");
    Ok(next)
}
