//! Core engine types: card ids, RNG, configuration, actions, state.
//!
//! This module holds the values every other module passes around. None of
//! them know the rules of the game.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{CardId, CardIdAllocator};
pub use rng::GameRng;
pub use config::{ConfigError, Difficulty, GameConfig};
pub use action::Action;
pub use state::{Column, GameState, StockPile, COLUMN_COUNT, MAX_COMPLETED_RUNS, RUN_LENGTH};
