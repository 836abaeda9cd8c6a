//! Card identification.
//!
//! Every physical card in a game gets a `CardId` when the pack is built.
//! The pack holds up to eight copies of the same (suit, rank) pair, so the
//! id is the only thing that tells duplicates apart.
//!
//! ## Usage
//!
//! ```
//! use spider_engine::core::CardId;
//!
//! let id = CardId(42);
//! assert_eq!(id.to_string(), "c042");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within one game.
///
/// Allocated sequentially during pack construction and never reused, so it
/// is stable for the life of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// Get the raw index.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{:03}", self.0)
    }
}

/// Sequential `CardId` allocator.
#[derive(Clone, Debug, Default)]
pub struct CardIdAllocator {
    next: u16,
}

impl CardIdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> CardId {
        let id = CardId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> usize {
        usize::from(self.next)
    }
}
