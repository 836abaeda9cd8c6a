//! Card values.
//!
//! A `Card` is a small `Copy` value. Turning a card face-up produces a new
//! value; nothing is flipped in place behind a shared reference.

use serde::{Deserialize, Serialize};

use super::definition::{Rank, Suit};
use crate::core::entity::CardId;

/// A single card in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the game.
    pub id: CardId,

    pub suit: Suit,

    pub rank: Rank,

    /// Is this card showing its face?
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub fn face_up(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            face_up: true,
            ..Self::new(id, suit, rank)
        }
    }

    /// Copy of this card turned face-up.
    #[must_use]
    pub fn flipped_up(self) -> Self {
        Self {
            face_up: true,
            ..self
        }
    }

    /// Copy of this card turned face-down.
    #[must_use]
    pub fn flipped_down(self) -> Self {
        Self {
            face_up: false,
            ..self
        }
    }

    /// True if `next` may sit directly on top of `self` inside a movable
    /// sequence: both face-up, same suit, one rank lower.
    #[must_use]
    pub fn accepts_in_sequence(&self, next: &Card) -> bool {
        self.face_up && next.face_up && self.suit == next.suit && self.rank.is_one_above(next.rank)
    }

    /// Rank and suit label, e.g. `"10♥"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "{}", self.label())
        } else {
            write!(f, "[{}]", self.label())
        }
    }
}
