//! Action representation.
//!
//! Spider has exactly two kinds of action: move a sequence between
//! columns, or deal one stock pile across the tableau. Actions are plain
//! values so they can be enumerated, compared and replayed.

use serde::{Deserialize, Serialize};

/// A player action.
///
/// ## Example
///
/// ```
/// use spider_engine::core::Action;
///
/// let mv = Action::Move { from: 3, start: 4, to: 7 };
/// assert!(!mv.is_deal());
/// assert!(Action::Deal.is_deal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the cards of column `from`, starting at index `start`, onto column `to`.
    Move { from: usize, start: usize, to: usize },

    /// Deal the next stock pile, one card per column.
    Deal,
}

impl Action {
    /// Check if this action deals from the stock.
    #[must_use]
    pub fn is_deal(&self) -> bool {
        matches!(self, Action::Deal)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, start, to } => write!(f, "move {from}[{start}..] -> {to}"),
            Action::Deal => write!(f, "deal"),
        }
    }
}
