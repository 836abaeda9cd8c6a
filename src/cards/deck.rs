//! Deck and pack construction.
//!
//! A *deck* is one card of each rank for every suit in play. The *pack* is
//! `difficulty.repeats()` decks laid end to end: 104 cards for every
//! supported difficulty. Ids come from a single allocator so copies of the
//! same (suit, rank) remain distinguishable.

use super::definition::{Rank, Suit};
use super::instance::Card;
use crate::core::config::Difficulty;
use crate::core::entity::CardIdAllocator;
use crate::core::rng::GameRng;

/// Cards in a full two-pack Spider game.
pub const PACK_SIZE: usize = 104;

/// Build one face-down deck: every rank of every suit, Ace first.
pub fn build_deck(suits: &[Suit], ids: &mut CardIdAllocator) -> Vec<Card> {
    suits
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (suit, rank)))
        .map(|(suit, rank)| Card::new(ids.alloc(), suit, rank))
        .collect()
}

/// Build the unshuffled 104-card pack for a difficulty.
#[must_use]
pub fn build_pack(difficulty: Difficulty) -> Vec<Card> {
    let mut ids = CardIdAllocator::new();
    let mut pack = Vec::with_capacity(PACK_SIZE);

    for _ in 0..difficulty.repeats() {
        pack.extend(build_deck(difficulty.suits(), &mut ids));
    }

    debug_assert_eq!(pack.len(), PACK_SIZE);
    pack
}

/// Build and shuffle a pack.
#[must_use]
pub fn shuffled_pack(difficulty: Difficulty, rng: &mut GameRng) -> Vec<Card> {
    let mut pack = build_pack(difficulty);
    rng.shuffle(&mut pack);
    pack
}
