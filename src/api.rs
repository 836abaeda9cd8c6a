//! Flat functional boundary for front ends.
//!
//! These wrap the `rules` and `hint` modules with the default scoring
//! (start at 500, -1 per move, +100 per run). Front ends that need other
//! scoring use [`SpiderRules`] with their own [`GameConfig`].

use crate::core::{Column, Difficulty, GameConfig, GameState};
use crate::hint::{self, Hint};
use crate::rules::{self, DealError, MoveError, SpiderRules};

/// Deal a new game with a fresh random seed.
#[must_use]
pub fn create_game(difficulty: Difficulty) -> GameState {
    SpiderRules::new(GameConfig::default().with_difficulty(difficulty)).new_game()
}

/// Deal a reproducible game.
#[must_use]
pub fn create_game_with_seed(difficulty: Difficulty, seed: u64) -> GameState {
    SpiderRules::new(
        GameConfig::default()
            .with_difficulty(difficulty)
            .with_seed(seed),
    )
    .new_game()
}

/// Move a sequence between columns. See [`rules::move_cards`].
pub fn move_cards(
    state: &GameState,
    source_column: usize,
    start_index: usize,
    target_column: usize,
) -> Result<GameState, MoveError> {
    rules::move_cards(
        state,
        source_column,
        start_index,
        target_column,
        &GameConfig::default(),
    )
}

/// Deal the next stock pile. See [`rules::deal_from_stock`].
pub fn deal_from_stock(state: &GameState) -> Result<GameState, DealError> {
    rules::deal_from_stock(state, &GameConfig::default())
}

/// True once all eight runs are complete.
#[must_use]
pub fn is_game_won(state: &GameState) -> bool {
    rules::is_game_won(state)
}

/// True if `column[start..]` is a movable sequence.
#[must_use]
pub fn is_valid_sequence(column: &Column, start: usize) -> bool {
    rules::is_valid_sequence(column, start)
}

/// True if `source[start..]` may be placed on `target`.
#[must_use]
pub fn can_move_cards(source: &Column, start: usize, target: &Column) -> bool {
    rules::can_move_cards(source, start, target)
}

/// Index where a complete King-to-Ace run starts at the top of `column`.
#[must_use]
pub fn check_complete_run(column: &Column) -> Option<usize> {
    rules::check_complete_run(column)
}

/// Remove every complete run from the tableau, crediting the run bonus.
#[must_use]
pub fn remove_complete_runs(state: &GameState) -> GameState {
    rules::remove_complete_runs(state, &GameConfig::default())
}

/// Suggest the next action.
#[must_use]
pub fn find_hint(state: &GameState) -> Hint {
    hint::find_hint(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_game_all_difficulties() {
        for difficulty in [Difficulty::OneSuit, Difficulty::TwoSuits, Difficulty::FourSuits] {
            let state = create_game(difficulty);
            assert_eq!(state.total_card_count(), 104);
            assert_eq!(state.difficulty(), difficulty);
            assert_eq!(state.score(), 500);
        }
    }

    #[test]
    fn test_seeded_games_match() {
        let a = create_game_with_seed(Difficulty::TwoSuits, 1234);
        let b = create_game_with_seed(Difficulty::TwoSuits, 1234);
        let c = create_game_with_seed(Difficulty::TwoSuits, 1235);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deal_through_api() {
        let state = create_game_with_seed(Difficulty::OneSuit, 9);
        let next = deal_from_stock(&state).unwrap();

        assert_eq!(next.stock_pile_count(), 4);
        assert_eq!(next.score(), 500);
        assert_eq!(next.moves(), 1);
        assert!(!is_game_won(&next));
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let state = create_game_with_seed(Difficulty::FourSuits, 3);
        let err = move_cards(&state, 2, 0, 2).unwrap_err();

        assert_eq!(err, MoveError::SameColumn(2));
        assert_eq!(state, create_game_with_seed(Difficulty::FourSuits, 3));
    }

    #[test]
    fn test_fresh_deal_has_no_runs() {
        let state = create_game_with_seed(Difficulty::OneSuit, 77);

        assert!(state.columns().iter().all(|c| check_complete_run(c).is_none()));
        assert_eq!(remove_complete_runs(&state), state);
    }
}
