//! First-class invariants for Spider.
//!
//! Invariants are properties that must hold after every transition. They
//! are testable independently; debug builds assert the structural ones
//! after every move and deal.

use derive_more::{Display, Error};
use rustc_hash::FxHashSet;

use crate::cards::PACK_SIZE;
use crate::core::{GameState, COLUMN_COUNT, MAX_COMPLETED_RUNS};

/// A logical property that must hold for a given state.
pub trait Invariant {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &GameState) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Tableau + stock + 13 per completed run is always 104.
pub struct CardCount;

impl Invariant for CardCount {
    fn holds(state: &GameState) -> bool {
        state.total_card_count() == PACK_SIZE
    }

    fn description() -> &'static str {
        "Tableau, stock and completed runs account for all 104 cards"
    }
}

/// Once a card is face-up, every card above it is face-up too.
pub struct FaceUpContiguous;

impl Invariant for FaceUpContiguous {
    fn holds(state: &GameState) -> bool {
        state.columns().iter().all(|column| {
            column
                .iter()
                .skip_while(|card| !card.face_up)
                .all(|card| card.face_up)
        })
    }

    fn description() -> &'static str {
        "Face-up cards form a contiguous block at the top of each column"
    }
}

/// Every stock pile holds between 1 and 10 cards, all face-down.
pub struct StockPileBounds;

impl Invariant for StockPileBounds {
    fn holds(state: &GameState) -> bool {
        state.stock().iter().all(|pile| {
            (1..=COLUMN_COUNT).contains(&pile.len()) && pile.iter().all(|card| !card.face_up)
        })
    }

    fn description() -> &'static str {
        "Stock piles hold 1-10 face-down cards"
    }
}

/// No card id appears twice.
pub struct UniqueCardIds;

impl Invariant for UniqueCardIds {
    fn holds(state: &GameState) -> bool {
        let mut seen = FxHashSet::default();
        state.all_cards().all(|card| seen.insert(card.id))
    }

    fn description() -> &'static str {
        "Card ids are unique within the game"
    }
}

/// Completed runs stay within 0..=8 and match the recorded suits.
pub struct RunsInRange;

impl Invariant for RunsInRange {
    fn holds(state: &GameState) -> bool {
        state.completed_runs() <= MAX_COMPLETED_RUNS
            && state.completed_run_suits().len() == usize::from(state.completed_runs())
    }

    fn description() -> &'static str {
        "Completed runs are between 0 and 8 and each has a recorded suit"
    }
}

/// Eight completed runs if and only if no cards remain in play.
pub struct WinConsistency;

impl Invariant for WinConsistency {
    fn holds(state: &GameState) -> bool {
        let cleared = state.tableau_card_count() == 0 && state.stock_card_count() == 0;
        cleared == (state.completed_runs() == MAX_COMPLETED_RUNS)
    }

    fn description() -> &'static str {
        "The game is won exactly when tableau and stock are both empty"
    }
}

type Check = (fn(&GameState) -> bool, fn() -> &'static str);

const STRUCTURE: [Check; 4] = [
    (FaceUpContiguous::holds, FaceUpContiguous::description),
    (StockPileBounds::holds, StockPileBounds::description),
    (UniqueCardIds::holds, UniqueCardIds::description),
    (RunsInRange::holds, RunsInRange::description),
];

const ACCOUNTING: [Check; 2] = [
    (CardCount::holds, CardCount::description),
    (WinConsistency::holds, WinConsistency::description),
];

fn run_checks<'a>(
    state: &GameState,
    checks: impl IntoIterator<Item = &'a Check>,
) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .into_iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation {
            description: description(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Check every invariant. Use on states that came from a real deal.
pub fn check_all(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    run_checks(state, STRUCTURE.iter().chain(ACCOUNTING.iter()))
}

/// Check the invariants that do not depend on a full 104-card pack.
///
/// Suitable for hand-built partial layouts.
pub fn check_structure(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    run_checks(state, STRUCTURE.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::{CardId, Difficulty, GameConfig};
    use crate::rules::SpiderRules;

    fn dealt() -> GameState {
        SpiderRules::new(GameConfig::default().with_seed(42)).new_game()
    }

    #[test]
    fn test_fresh_deal_holds() {
        assert_eq!(check_all(&dealt()), Ok(()));
    }

    #[test]
    fn test_face_up_gap_violates() {
        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();
        columns[0] = vec![
            Card::face_up(CardId(0), Suit::Spades, Rank::Nine),
            Card::new(CardId(1), Suit::Spades, Rank::Eight),
        ];
        let state = GameState::from_layout(Difficulty::OneSuit, columns, vec![], 0);

        assert!(!FaceUpContiguous::holds(&state));
        let violations = check_structure(&state).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, FaceUpContiguous::description());
    }

    #[test]
    fn test_duplicate_ids_violate() {
        let mut columns: [Vec<Card>; COLUMN_COUNT] = Default::default();
        columns[0] = vec![Card::face_up(CardId(5), Suit::Spades, Rank::Nine)];
        columns[1] = vec![Card::face_up(CardId(5), Suit::Spades, Rank::Nine)];
        let state = GameState::from_layout(Difficulty::OneSuit, columns, vec![], 0);

        assert!(!UniqueCardIds::holds(&state));
    }

    #[test]
    fn test_oversized_or_empty_pile_violates() {
        let card = |id| Card::new(CardId(id), Suit::Spades, Rank::Two);
        let big = GameState::from_layout(
            Difficulty::OneSuit,
            Default::default(),
            vec![(0..11).map(card).collect()],
            0,
        );
        let empty = GameState::from_layout(Difficulty::OneSuit, Default::default(), vec![vec![]], 0);

        assert!(!StockPileBounds::holds(&big));
        assert!(!StockPileBounds::holds(&empty));
    }

    #[test]
    fn test_partial_layout_fails_accounting_only() {
        let state = GameState::from_layout(Difficulty::OneSuit, Default::default(), vec![], 2);

        assert_eq!(check_structure(&state), Ok(()));
        let violations = check_all(&state).unwrap_err();
        assert!(violations.iter().any(|v| v.description == CardCount::description()));
    }

    #[test]
    fn test_win_consistency() {
        let won = GameState::from_layout(Difficulty::OneSuit, Default::default(), vec![], 8);
        assert_eq!(check_all(&won), Ok(()));

        let premature = GameState::from_layout(Difficulty::OneSuit, Default::default(), vec![], 7);
        assert!(!WinConsistency::holds(&premature));
    }

    #[test]
    fn test_violation_display() {
        let violation = InvariantViolation {
            description: CardCount::description(),
        };
        assert_eq!(
            violation.to_string(),
            "Invariant violated: Tableau, stock and completed runs account for all 104 cards"
        );
    }
}
