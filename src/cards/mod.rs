//! Card system: suits, ranks, card values and pack construction.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: closed enumerations with pure integer/display mappings
//! - `Card`: a `Copy` value carrying id, suit, rank and face-up flag
//! - `build_pack`: the 104-card pack for a difficulty

pub mod definition;
pub mod instance;
pub mod deck;

pub use definition::{Rank, Suit};
pub use instance::Card;
pub use deck::{build_deck, build_pack, shuffled_pack, PACK_SIZE};
