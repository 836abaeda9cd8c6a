//! Game configuration: difficulty and scoring.
//!
//! Difficulty is fixed for the life of a game. Scoring constants live in
//! `GameConfig` so consumers can tweak them without touching the rules.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Number of suits in play.
///
/// The pack is always 104 cards: fewer suits means more copies of each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    OneSuit,
    TwoSuits,
    FourSuits,
}

impl Difficulty {
    /// Parse a suit count. Only 1, 2 and 4 divide 8 evenly.
    pub fn from_suit_count(count: u8) -> Result<Self, ConfigError> {
        match count {
            1 => Ok(Self::OneSuit),
            2 => Ok(Self::TwoSuits),
            4 => Ok(Self::FourSuits),
            other => Err(ConfigError::UnsupportedSuitCount(other)),
        }
    }

    /// Number of distinct suits.
    #[must_use]
    pub fn suit_count(self) -> u8 {
        match self {
            Self::OneSuit => 1,
            Self::TwoSuits => 2,
            Self::FourSuits => 4,
        }
    }

    /// The suits in play, in pack-construction order.
    #[must_use]
    pub fn suits(self) -> &'static [Suit] {
        match self {
            Self::OneSuit => &[Suit::Spades],
            Self::TwoSuits => &[Suit::Spades, Suit::Hearts],
            Self::FourSuits => &Suit::ALL,
        }
    }

    /// How many 13-card-per-suit decks make up the pack (8 / suit count).
    #[must_use]
    pub fn repeats(self) -> usize {
        8 / usize::from(self.suit_count())
    }
}

/// Configuration error.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Suit count other than 1, 2 or 4.
    #[display("Unsupported suit count {_0}: expected 1, 2 or 4")]
    UnsupportedSuitCount(#[error(not(source))] u8),
}

/// Full game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Suits in play.
    pub difficulty: Difficulty,

    /// Shuffle seed. `None` draws one from entropy at deal time.
    pub seed: Option<u64>,

    /// Score at the start of a game.
    pub initial_score: i64,

    /// Points deducted for every accepted tableau move.
    pub move_penalty: i64,

    /// Points awarded for each completed King-to-Ace run.
    pub run_bonus: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::OneSuit,
            seed: None,
            initial_score: 500,
            move_penalty: 1,
            run_bonus: 100,
        }
    }
}

impl GameConfig {
    /// Create a new config with the given difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Create a new config with a fixed shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom starting score.
    pub fn with_initial_score(mut self, score: i64) -> Self {
        self.initial_score = score;
        self
    }

    /// Create a new config with a custom per-move penalty.
    pub fn with_move_penalty(mut self, penalty: i64) -> Self {
        self.move_penalty = penalty;
        self
    }

    /// Create a new config with a custom run bonus.
    pub fn with_run_bonus(mut self, bonus: i64) -> Self {
        self.run_bonus = bonus;
        self
    }
}
