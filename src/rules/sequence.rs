//! Sequence validation.
//!
//! A sequence is the face-up, same-suit, strictly descending tail of a
//! column. Only sequences move as a unit.

use crate::core::Column;

/// True if the cards from `start` to the top of `column` form a movable
/// sequence.
///
/// Every card in the range must be face-up and each card must be the same
/// suit and exactly one rank below the card beneath it. A single face-up
/// card is a valid sequence. An out-of-range `start` is not.
#[must_use]
pub fn is_valid_sequence(column: &Column, start: usize) -> bool {
    let mut cards = column.iter().skip(start);
    let Some(mut below) = cards.next() else {
        return false;
    };
    if !below.face_up {
        return false;
    }

    for card in cards {
        if !below.accepts_in_sequence(card) {
            return false;
        }
        below = card;
    }
    true
}

/// Lowest index from which the column's top is a valid sequence.
///
/// `None` for an empty column or one whose top card is face-down.
#[must_use]
pub fn sequence_start(column: &Column) -> Option<usize> {
    let top = column.back()?;
    if !top.face_up {
        return None;
    }

    let mut start = column.len() - 1;
    while start > 0 {
        let below = &column[start - 1];
        if !below.accepts_in_sequence(&column[start]) {
            break;
        }
        start -= 1;
    }
    Some(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::core::CardId;

    fn up(id: u16, suit: Suit, rank: Rank) -> Card {
        Card::face_up(CardId(id), suit, rank)
    }

    fn column(cards: &[Card]) -> Column {
        cards.iter().copied().collect()
    }

    #[test]
    fn test_single_face_up_card() {
        let col = column(&[up(0, Suit::Spades, Rank::Seven)]);
        assert!(is_valid_sequence(&col, 0));
    }

    #[test]
    fn test_descending_same_suit() {
        let col = column(&[
            up(0, Suit::Spades, Rank::Eight),
            up(1, Suit::Spades, Rank::Seven),
            up(2, Suit::Spades, Rank::Six),
        ]);
        assert!(is_valid_sequence(&col, 0));
        assert!(is_valid_sequence(&col, 1));
        assert!(is_valid_sequence(&col, 2));
    }

    #[test]
    fn test_rejects_face_down() {
        let col = column(&[
            up(0, Suit::Spades, Rank::Eight).flipped_down(),
            up(1, Suit::Spades, Rank::Seven),
        ]);
        assert!(!is_valid_sequence(&col, 0));
        assert!(is_valid_sequence(&col, 1));
    }

    #[test]
    fn test_rejects_gap_and_suit_break() {
        let gap = column(&[up(0, Suit::Spades, Rank::Seven), up(1, Suit::Spades, Rank::Five)]);
        let suit_break = column(&[up(0, Suit::Spades, Rank::Seven), up(1, Suit::Hearts, Rank::Six)]);
        let ascending = column(&[up(0, Suit::Spades, Rank::Six), up(1, Suit::Spades, Rank::Seven)]);

        assert!(!is_valid_sequence(&gap, 0));
        assert!(!is_valid_sequence(&suit_break, 0));
        assert!(!is_valid_sequence(&ascending, 0));
    }

    #[test]
    fn test_out_of_range() {
        let col = column(&[up(0, Suit::Spades, Rank::Seven)]);
        assert!(!is_valid_sequence(&col, 1));
        assert!(!is_valid_sequence(&Column::new(), 0));
    }

    #[test]
    fn test_sequence_start() {
        let col = column(&[
            up(0, Suit::Hearts, Rank::Nine).flipped_down(),
            up(1, Suit::Hearts, Rank::Nine),
            up(2, Suit::Spades, Rank::Eight),
            up(3, Suit::Spades, Rank::Seven),
        ]);
        assert_eq!(sequence_start(&col), Some(2));

        let buried = column(&[up(0, Suit::Spades, Rank::Two).flipped_down()]);
        assert_eq!(sequence_start(&buried), None);
        assert_eq!(sequence_start(&Column::new()), None);
    }
}
