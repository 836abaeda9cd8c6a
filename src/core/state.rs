//! Game state: the tableau, the stock and the counters.
//!
//! ## GameState
//!
//! - Ten columns, index 0 = buried bottom card, last = accessible top card
//! - Stock of face-down piles, dealt last-pile-first
//! - Completed-run counter (0-8), score, move counter, difficulty
//!
//! Uses `im` persistent data structures so a transition clones the state in
//! O(1) and only copies the columns it touches. Every rules operation takes
//! `&GameState` and returns a new value; the input is never modified.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{Difficulty, GameConfig};
use super::rng::GameRng;
use crate::cards::{shuffled_pack, Card, Suit};
use crate::invariants::{check_structure, InvariantViolation};

/// Number of tableau columns.
pub const COLUMN_COUNT: usize = 10;

/// Cards in a complete King-to-Ace run.
pub const RUN_LENGTH: usize = 13;

/// Runs needed to win (104 / 13).
pub const MAX_COMPLETED_RUNS: u8 = 8;

/// Columns that receive six cards in the initial deal; the rest get five.
const TALL_COLUMNS: usize = 4;

/// One tableau column, bottom first.
pub type Column = Vector<Card>;

/// One stock pile. Never holds more than one card per column.
pub type StockPile = SmallVec<[Card; COLUMN_COUNT]>;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    difficulty: Difficulty,

    /// Shuffle seed, when the state came from a deal.
    seed: Option<u64>,

    columns: [Column; COLUMN_COUNT],

    /// Stock piles; the last pile is dealt first.
    stock: Vector<StockPile>,

    completed_runs: u8,

    /// Suit of each removed run, in removal order.
    completed_run_suits: Vector<Suit>,

    score: i64,

    moves: u32,
}

impl GameState {
    /// Shuffle a fresh pack and lay out the opening position.
    ///
    /// Columns 0-3 get six cards and columns 4-9 five, with only the last
    /// card of each face-up. The remaining 50 cards become five face-down
    /// stock piles of ten, in pack order.
    #[must_use]
    pub fn deal(difficulty: Difficulty, initial_score: i64, rng: &mut GameRng) -> Self {
        let seed = rng.seed();
        let mut cards = shuffled_pack(difficulty, rng).into_iter();

        let columns: [Column; COLUMN_COUNT] = std::array::from_fn(|col| {
            let height = if col < TALL_COLUMNS { 6 } else { 5 };
            (0..height)
                .filter_map(|row| {
                    let card = cards.next()?;
                    Some(if row == height - 1 { card.flipped_up() } else { card })
                })
                .collect()
        });

        let remaining: Vec<Card> = cards.collect();
        let stock = remaining
            .chunks(COLUMN_COUNT)
            .map(StockPile::from_slice)
            .collect();

        Self {
            difficulty,
            seed: Some(seed),
            columns,
            stock,
            completed_runs: 0,
            completed_run_suits: Vector::new(),
            score: initial_score,
            moves: 0,
        }
    }

    /// Build a state from an explicit layout, for fixtures.
    ///
    /// The layout is taken as given: nothing checks card counts, facing or
    /// ids. Score and move counter start at the default config values and
    /// each pre-completed run is recorded as the difficulty's first suit;
    /// use [`GameState::with_score`] and
    /// [`GameState::with_completed_run_suits`] to match another config.
    ///
    /// Debug builds assert structural invariants after every move and deal,
    /// so a malformed layout panics on its first transition there. Use
    /// [`GameState::restore`] for positions that come from outside.
    #[must_use]
    pub fn from_layout(
        difficulty: Difficulty,
        columns: [Vec<Card>; COLUMN_COUNT],
        stock: Vec<Vec<Card>>,
        completed_runs: u8,
    ) -> Self {
        let first_suit = difficulty.suits().first().copied().unwrap_or(Suit::Spades);

        Self {
            difficulty,
            seed: None,
            columns: columns.map(Column::from),
            stock: stock.into_iter().map(StockPile::from_vec).collect(),
            completed_runs,
            completed_run_suits: std::iter::repeat(first_suit)
                .take(usize::from(completed_runs))
                .collect(),
            score: GameConfig::default().initial_score,
            moves: 0,
        }
    }

    /// Rebuild a saved position, rejecting layouts no game could reach.
    ///
    /// The completed-run counter is the length of `completed_run_suits`.
    /// Runs the structural invariants; the card count is not checked, so
    /// partial layouts are accepted.
    pub fn restore(
        difficulty: Difficulty,
        columns: [Vec<Card>; COLUMN_COUNT],
        stock: Vec<Vec<Card>>,
        completed_run_suits: Vec<Suit>,
        score: i64,
        moves: u32,
    ) -> Result<Self, Vec<InvariantViolation>> {
        let state = Self::from_layout(difficulty, columns, stock, 0)
            .with_completed_run_suits(completed_run_suits)
            .with_score(score)
            .with_moves(moves);
        check_structure(&state)?;
        Ok(state)
    }

    /// Replace the completed runs with one per listed suit.
    ///
    /// The counter saturates at `u8::MAX`; the runs invariant flags anything
    /// past eight.
    #[must_use]
    pub fn with_completed_run_suits(mut self, suits: impl IntoIterator<Item = Suit>) -> Self {
        self.completed_run_suits = suits.into_iter().collect();
        self.completed_runs = u8::try_from(self.completed_run_suits.len()).unwrap_or(u8::MAX);
        self
    }

    /// Replace the score (fixtures, restores).
    #[must_use]
    pub fn with_score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Replace the move counter (fixtures, restores).
    #[must_use]
    pub fn with_moves(mut self, moves: u32) -> Self {
        self.moves = moves;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn columns(&self) -> &[Column; COLUMN_COUNT] {
        &self.columns
    }

    /// Get a column, or `None` if the index is out of range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Get a single tableau card.
    #[must_use]
    pub fn tableau_card(&self, column: usize, index: usize) -> Option<&Card> {
        self.column(column)?.get(index)
    }

    #[must_use]
    pub fn stock(&self) -> &Vector<StockPile> {
        &self.stock
    }

    /// Number of deals left.
    #[must_use]
    pub fn stock_pile_count(&self) -> usize {
        self.stock.len()
    }

    /// Number of undealt cards.
    #[must_use]
    pub fn stock_card_count(&self) -> usize {
        self.stock.iter().map(|pile| pile.len()).sum()
    }

    #[must_use]
    pub fn completed_runs(&self) -> u8 {
        self.completed_runs
    }

    #[must_use]
    pub fn completed_run_suits(&self) -> &Vector<Suit> {
        &self.completed_run_suits
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Cards on the tableau.
    #[must_use]
    pub fn tableau_card_count(&self) -> usize {
        self.columns.iter().map(Vector::len).sum()
    }

    /// Cards accounted for: tableau + stock + 13 per completed run.
    #[must_use]
    pub fn total_card_count(&self) -> usize {
        self.tableau_card_count()
            + self.stock_card_count()
            + RUN_LENGTH * usize::from(self.completed_runs)
    }

    /// Index of the first empty column, if any.
    #[must_use]
    pub fn first_empty_column(&self) -> Option<usize> {
        self.columns.iter().position(Vector::is_empty)
    }

    /// Iterate over every card on the tableau and in the stock.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.columns
            .iter()
            .flat_map(|col| col.iter())
            .chain(self.stock.iter().flat_map(|pile| pile.iter()))
    }

    // === Transition helpers ===
    //
    // Used by the rules on a freshly cloned state. Indices are validated by
    // the caller.

    pub(crate) fn column_mut(&mut self, index: usize) -> &mut Column {
        &mut self.columns[index]
    }

    /// Turn the top card of a column face-up if it is face-down.
    ///
    /// Returns true if a card was revealed.
    pub(crate) fn reveal_top(&mut self, index: usize) -> bool {
        let column = &mut self.columns[index];
        match column.back().copied() {
            Some(top) if !top.face_up => {
                let last = column.len() - 1;
                column.set(last, top.flipped_up());
                true
            }
            _ => false,
        }
    }

    pub(crate) fn pop_stock_pile(&mut self) -> Option<StockPile> {
        self.stock.pop_back()
    }

    pub(crate) fn record_move(&mut self, penalty: i64) {
        self.moves += 1;
        self.score -= penalty;
    }

    pub(crate) fn record_deal(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn record_run(&mut self, suit: Suit, bonus: i64) {
        self.completed_runs += 1;
        self.completed_run_suits.push_back(suit);
        self.score += bonus;
    }
}
