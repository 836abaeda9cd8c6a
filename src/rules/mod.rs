//! Spider rules.
//!
//! Pure functions over `GameState`:
//! - Sequence validation and move legality
//! - Move application, stock dealing, run removal
//! - Win detection
//!
//! Transitions take `&GameState` and return `Result<GameState, _>`. A
//! rejection never changes the input.

pub mod engine;
pub mod error;
pub mod moves;
pub mod runs;
pub mod sequence;
pub mod stock;

pub use engine::{is_game_won, GameOutcome, RulesEngine, SpiderRules};
pub use error::{DealError, MoveError, RulesError};
pub use moves::{can_move_cards, check_move, legal_moves, move_cards, validate_move};
pub use runs::{check_complete_run, remove_complete_runs};
pub use sequence::{is_valid_sequence, sequence_start};
pub use stock::{can_deal_from_stock, check_deal, deal_from_stock};
