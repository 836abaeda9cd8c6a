//! Rules engine trait and the Spider implementation.
//!
//! `RulesEngine` is the seam consumers program against:
//! - What actions are legal
//! - How actions produce the next state
//! - When the game is over
//!
//! `SpiderRules` carries a `GameConfig` and forwards to the free functions
//! in the sibling modules, which stay usable on their own.

use tracing::{info, instrument};

use super::error::RulesError;
use super::moves::{legal_moves, move_cards};
use super::stock::{can_deal_from_stock, deal_from_stock};
use crate::core::{Action, GameConfig, GameRng, GameState, MAX_COMPLETED_RUNS};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// All eight runs completed.
    Won,
    /// No legal move and no legal deal remain.
    Stuck,
}

/// True once all eight runs are complete.
///
/// By the card-count invariant this is the same as the tableau and stock
/// both being empty.
#[must_use]
pub fn is_game_won(state: &GameState) -> bool {
    state.completed_runs() == MAX_COMPLETED_RUNS
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply_action` must not modify its input; it returns a new state
/// - `is_terminal`: return None if the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Every legal action in `state`, in a stable order.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action, producing the next state or the rejection reason.
    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, RulesError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameOutcome>;

    // === Convenience Methods ===

    /// Check whether a specific action is legal.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }

    /// Apply a sequence of actions, stopping at the first rejection.
    fn apply_all<'a, I>(&self, state: &GameState, actions: I) -> Result<GameState, RulesError>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut current = state.clone();
        for action in actions {
            current = self.apply_action(&current, action)?;
        }
        Ok(current)
    }
}

/// Spider rules with a fixed configuration.
#[derive(Clone, Debug, Default)]
pub struct SpiderRules {
    config: GameConfig,
}

impl SpiderRules {
    /// Create a rules engine with the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Deal a new game.
    ///
    /// Uses the configured seed when set, otherwise a fresh entropy seed
    /// (recorded on the returned state).
    #[instrument(skip(self), fields(difficulty = ?self.config.difficulty))]
    pub fn new_game(&self) -> GameState {
        let mut rng = self
            .config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new);
        let state = GameState::deal(self.config.difficulty, self.config.initial_score, &mut rng);
        info!(seed = rng.seed(), "new game dealt");
        state
    }
}

impl RulesEngine for SpiderRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = legal_moves(state);
        if can_deal_from_stock(state) {
            actions.push(Action::Deal);
        }
        actions
    }

    fn apply_action(&self, state: &GameState, action: &Action) -> Result<GameState, RulesError> {
        let next = match *action {
            Action::Move { from, start, to } => move_cards(state, from, start, to, &self.config)?,
            Action::Deal => deal_from_stock(state, &self.config)?,
        };
        if is_game_won(&next) {
            info!(score = next.score(), moves = next.moves(), "game won");
        }
        Ok(next)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameOutcome> {
        if is_game_won(state) {
            Some(GameOutcome::Won)
        } else if self.legal_actions(state).is_empty() {
            Some(GameOutcome::Stuck)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::{CardId, Difficulty, COLUMN_COUNT};
    use crate::rules::error::{DealError, MoveError};

    fn run(suit: Suit, first_id: u16) -> Vec<Card> {
        Rank::ALL
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &rank)| Card::face_up(CardId(first_id + i as u16), suit, rank))
            .collect()
    }

    #[test]
    fn test_new_game_seeded() {
        let rules = SpiderRules::new(GameConfig::default().with_seed(42));
        let a = rules.new_game();
        let b = rules.new_game();

        assert_eq!(a, b);
        assert_eq!(a.seed(), Some(42));
        assert_eq!(a.total_card_count(), 104);
    }

    #[test]
    fn test_new_game_entropy_records_seed() {
        let rules = SpiderRules::new(GameConfig::default().with_difficulty(Difficulty::FourSuits));
        let state = rules.new_game();
        let seed = state.seed().unwrap();

        let replay = SpiderRules::new(
            GameConfig::default()
                .with_difficulty(Difficulty::FourSuits)
                .with_seed(seed),
        )
        .new_game();
        assert_eq!(state, replay);
    }

    #[test]
    fn test_is_game_won() {
        let empty: [Vec<Card>; COLUMN_COUNT] = Default::default();
        let won = GameState::from_layout(Difficulty::OneSuit, empty.clone(), vec![], 8);
        let not_yet = GameState::from_layout(Difficulty::OneSuit, empty, vec![], 7);

        assert!(is_game_won(&won));
        assert!(!is_game_won(&not_yet));
    }

    #[test]
    fn test_final_run_wins() {
        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();
        let mut cards = run(Suit::Spades, 0);
        let ace = cards.pop().unwrap();
        columns[0] = cards;
        columns[1] = vec![ace];
        let state = GameState::from_layout(Difficulty::OneSuit, columns, vec![], 7);
        let rules = SpiderRules::default();

        let next = rules
            .apply_action(&state, &Action::Move { from: 1, start: 0, to: 0 })
            .unwrap();

        assert!(is_game_won(&next));
        assert_eq!(rules.is_terminal(&next), Some(GameOutcome::Won));
        assert_eq!(next.tableau_card_count(), 0);
        assert_eq!(next.score(), 500 - 1 + 100);
    }

    #[test]
    fn test_apply_action_errors() {
        let rules = SpiderRules::default();
        let state = GameState::from_layout(Difficulty::OneSuit, Default::default(), vec![], 0);

        assert_eq!(
            rules.apply_action(&state, &Action::Deal),
            Err(RulesError::Deal(DealError::StockEmpty))
        );
        assert_eq!(
            rules.apply_action(&state, &Action::Move { from: 0, start: 0, to: 1 }),
            Err(RulesError::Move(MoveError::StartOutOfRange { start: 0, len: 0 }))
        );
    }

    #[test]
    fn test_stuck() {
        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();
        for (i, col) in columns.iter_mut().enumerate() {
            *col = vec![Card::face_up(CardId(i as u16), Suit::Spades, Rank::Two)];
        }
        let state = GameState::from_layout(Difficulty::OneSuit, columns, vec![], 0);
        let rules = SpiderRules::default();

        assert!(rules.legal_actions(&state).is_empty());
        assert_eq!(rules.is_terminal(&state), Some(GameOutcome::Stuck));
    }

    #[test]
    fn test_legal_actions_include_deal() {
        let rules = SpiderRules::new(GameConfig::default().with_seed(3));
        let state = rules.new_game();
        let actions = rules.legal_actions(&state);

        assert_eq!(actions.last(), Some(&Action::Deal));
        assert!(rules.is_legal(&state, &Action::Deal));
        assert_eq!(rules.is_terminal(&state), None);
    }

    #[test]
    fn test_apply_all() {
        let rules = SpiderRules::new(GameConfig::default().with_seed(11));
        let state = rules.new_game();

        let next = rules.apply_all(&state, &[Action::Deal, Action::Deal]).unwrap();
        assert_eq!(next.stock_pile_count(), 3);
        assert_eq!(next.moves(), 2);
    }
}
