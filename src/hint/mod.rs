//! Move suggestions.
//!
//! ## Overview
//!
//! A two-tier greedy search, not an optimal solver:
//!
//! - **Same-suit tier**: first legal move onto a non-empty column whose top
//!   card matches the moving sequence's suit (keeps sequences combinable)
//! - **Any-target tier**: first legal move onto any non-empty column
//! - Otherwise suggest dealing if the stock is non-empty, else report that
//!   nothing is left
//!
//! Moves onto empty columns are never suggested.
//!
//! ## Usage
//!
//! ```rust
//! use spider_engine::core::GameConfig;
//! use spider_engine::hint::{find_hint, Hint};
//! use spider_engine::rules::{RulesEngine, SpiderRules};
//!
//! let rules = SpiderRules::new(GameConfig::default().with_seed(42));
//! let state = rules.new_game();
//!
//! match find_hint(&state) {
//!     Hint::Move(mv) => {
//!         let next = rules.apply_action(&state, &mv.to_action()).unwrap();
//!         assert_eq!(next.moves(), 1);
//!     }
//!     Hint::DealFromStock => println!("deal"),
//!     Hint::NoMoves => println!("stuck"),
//! }
//! ```

pub mod search;

pub use search::find_hint;

use serde::{Deserialize, Serialize};

use crate::core::Action;

/// Priority class of a suggested move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HintTier {
    /// Target top card has the same suit as the moving sequence.
    SameSuit,
    /// Any legal non-empty target.
    AnyTarget,
}

/// A suggested tableau move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintMove {
    pub source_column: usize,
    pub card_index: usize,
    pub target_column: usize,
    pub tier: HintTier,
}

impl HintMove {
    /// The action that performs this move.
    #[must_use]
    pub fn to_action(&self) -> Action {
        Action::Move {
            from: self.source_column,
            start: self.card_index,
            to: self.target_column,
        }
    }
}

/// Result of a hint search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    Move(HintMove),
    /// No useful move, but cards remain in the stock.
    DealFromStock,
    /// No useful move and no deal available.
    NoMoves,
}

impl Hint {
    /// The suggested move, if this hint is one.
    #[must_use]
    pub fn as_move(&self) -> Option<&HintMove> {
        match self {
            Hint::Move(mv) => Some(mv),
            _ => None,
        }
    }
}
