//! # spider-engine
//!
//! Rules engine for Spider patience: two 52-card packs (104 cards) played
//! with one, two or four suits.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes `&GameState` and returns a
//!    new state or a typed rejection. Nothing is mutated in place.
//!
//! 2. **Cheap snapshots**: columns and stock are `im` persistent vectors,
//!    so a new state shares everything it did not change.
//!
//! 3. **Deterministic deals**: a seeded ChaCha8 RNG makes every game
//!    reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, actions, state
//! - `cards`: Suits, ranks, card values, pack construction
//! - `rules`: Sequence/move validation, moves, runs, stock, win check
//! - `invariants`: Properties every reachable state satisfies
//! - `hint`: Two-tier greedy move suggestion
//! - `api`: Flat functions for front ends
//!
//! ## Example
//!
//! ```
//! use spider_engine::{create_game_with_seed, deal_from_stock, find_hint, Difficulty, Hint};
//!
//! let state = create_game_with_seed(Difficulty::OneSuit, 42);
//! let state = match find_hint(&state) {
//!     Hint::Move(mv) => spider_engine::move_cards(
//!         &state,
//!         mv.source_column,
//!         mv.card_index,
//!         mv.target_column,
//!     )
//!     .unwrap(),
//!     Hint::DealFromStock => deal_from_stock(&state).unwrap(),
//!     Hint::NoMoves => state,
//! };
//! assert_eq!(state.moves(), 1);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod invariants;
pub mod hint;
pub mod api;

// Re-export commonly used types
pub use crate::core::{
    Action, CardId, Column, ConfigError, Difficulty, GameConfig, GameRng, GameState, StockPile,
    COLUMN_COUNT, MAX_COMPLETED_RUNS, RUN_LENGTH,
};

pub use crate::cards::{Card, Rank, Suit, PACK_SIZE};

pub use crate::rules::{DealError, GameOutcome, MoveError, RulesEngine, RulesError, SpiderRules};

pub use crate::invariants::{check_all, check_structure, Invariant, InvariantViolation};

pub use crate::hint::{Hint, HintMove, HintTier};

pub use crate::api::{
    can_move_cards, check_complete_run, create_game, create_game_with_seed, deal_from_stock,
    find_hint, is_game_won, is_valid_sequence, move_cards, remove_complete_runs,
};
