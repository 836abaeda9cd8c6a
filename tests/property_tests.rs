//! Property-based tests for pack construction, dealing and rule play.

use proptest::prelude::*;

use spider_engine::cards::{build_pack, shuffled_pack, Card};
use spider_engine::core::{Action, Difficulty, GameConfig, GameRng, COLUMN_COUNT};
use spider_engine::invariants::check_all;
use spider_engine::rules::{RulesEngine, SpiderRules};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::OneSuit),
        Just(Difficulty::TwoSuits),
        Just(Difficulty::FourSuits),
    ]
}

fn sorted_by_id(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(|card| card.id);
    cards
}

proptest! {
    /// Property: the shuffle is a permutation of the pack.
    #[test]
    fn prop_shuffle_is_permutation(difficulty in difficulty(), seed in any::<u64>()) {
        let pack = build_pack(difficulty);
        let shuffled = shuffled_pack(difficulty, &mut GameRng::new(seed));

        prop_assert_eq!(shuffled.len(), pack.len());
        prop_assert_eq!(sorted_by_id(shuffled), sorted_by_id(pack));
    }

    /// Property: every deal has the standard geometry and holds all invariants.
    #[test]
    fn prop_deal_geometry(difficulty in difficulty(), seed in any::<u64>()) {
        let rules = SpiderRules::new(GameConfig::default().with_difficulty(difficulty).with_seed(seed));
        let state = rules.new_game();

        prop_assert_eq!(check_all(&state), Ok(()));
        for (i, column) in state.columns().iter().enumerate() {
            prop_assert_eq!(column.len(), if i < 4 { 6 } else { 5 });
            let face_up = column.iter().filter(|card| card.face_up).count();
            prop_assert_eq!(face_up, 1);
            prop_assert!(column.back().is_some_and(|card| card.face_up));
        }
        prop_assert_eq!(state.stock_pile_count(), 5);
        prop_assert!(state.stock().iter().all(|pile| pile.len() == COLUMN_COUNT));
    }

    /// Property: random legal play preserves every invariant and the
    /// score/move bookkeeping.
    #[test]
    fn prop_random_play_preserves_invariants(
        difficulty in difficulty(),
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<usize>(), 1..150),
    ) {
        let rules = SpiderRules::new(GameConfig::default().with_difficulty(difficulty).with_seed(seed));
        let mut state = rules.new_game();

        for choice in choices {
            let actions = rules.legal_actions(&state);
            if actions.is_empty() {
                break;
            }
            let action = actions[choice % actions.len()];
            let next = rules.apply_action(&state, &action).expect("legal actions apply");

            let runs = i64::from(next.completed_runs() - state.completed_runs());
            let penalty = if action == Action::Deal { 0 } else { 1 };
            prop_assert_eq!(next.score(), state.score() - penalty + 100 * runs);
            prop_assert_eq!(next.moves(), state.moves() + 1);
            prop_assert_eq!(check_all(&next), Ok(()));

            state = next;
        }
    }
}
