//! Rejection reasons.
//!
//! A rejected operation never changes the caller's state: transitions take
//! `&GameState` and only return a new value on success. These errors say
//! why nothing happened so a front end can explain it.

use derive_more::{Display, Error, From};

use crate::cards::Rank;

/// Why a tableau move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Source and target are the same column.
    #[display("Cannot move column {_0} onto itself")]
    SameColumn(#[error(not(source))] usize),

    /// Column index is not in 0..10.
    #[display("Column {_0} does not exist")]
    ColumnOutOfRange(#[error(not(source))] usize),

    /// Start index is past the end of the source column.
    #[display("Start index {start} is out of range for a column of {len} cards")]
    StartOutOfRange { start: usize, len: usize },

    /// Cards from the start index are not a face-up same-suit descending run.
    #[display("Cards from index {start} do not form a movable sequence")]
    NotASequence { start: usize },

    /// Target top card is face-down.
    #[display("Target top card is face-down")]
    TargetFaceDown,

    /// Target top card is not exactly one rank above the moving base card.
    #[display("Cannot place {moving:?} on {target:?}")]
    RankMismatch { moving: Rank, target: Rank },
}

/// Why a stock deal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DealError {
    /// No piles left.
    #[display("The stock is empty")]
    StockEmpty,

    /// Dealing onto an empty column is not allowed.
    #[display("Fill all columns before dealing (column {_0} is empty)")]
    EmptyColumn(#[error(not(source))] usize),

    /// Next pile does not hold exactly one card per column.
    #[display("Stock pile holds {_0} cards; a deal needs exactly 10")]
    PartialPile(#[error(not(source))] usize),
}

/// Either kind of rejection, for callers applying generic actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum RulesError {
    #[display("{_0}")]
    Move(MoveError),

    #[display("{_0}")]
    Deal(DealError),
}
