// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::components::position::Position;
use crate::components::stack::{DeckId, StackInfo};
use crate::config::layout::RANKS_PER_SUIT;

/// Card suit. The declaration order is the suit order of the card numbering:
/// numbers 0..13 are Spades, 13..26 Hearts, 26..39 Clubs and 39..52 Diamonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,
    Heart,
    Club,
    Diamond,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// Card rank, Ace counts as 1 and King as 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// True when `self` sits exactly one rank below `other`.
    pub fn is_one_below(self, other: Rank) -> bool {
        self.value() + 1 == other.value()
    }
}

/// Red or black.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// Suit and rank for card `number` in a universe played with `suit_count` suits.
///
/// Spider with one or two suits folds the suit index, so a two-suit game holds
/// only Spades and Hearts.
pub fn card_identity(number: usize, suit_count: usize) -> (Suit, Rank) {
    let suit_count = suit_count.clamp(1, ALL_SUITS.len());
    let suit = ALL_SUITS[(number / RANKS_PER_SUIT) % suit_count];
    let rank = ALL_RANKS[number % RANKS_PER_SUIT];
    (suit, rank)
}

/// One card of the universe.
///
/// `number`, `suit` and `rank` never change after the deal. Face state,
/// draggability, the owning deck and the layout position move with play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub number: usize,
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
    pub is_draggable: bool,
    pub stack: Option<StackInfo>,
    pub position: Position,
}

impl Card {
    pub fn from_number(number: usize, suit_count: usize) -> Self {
        let (suit, rank) = card_identity(number, suit_count);
        Card {
            number,
            suit,
            rank,
            is_face_up: false,
            is_draggable: false,
            stack: None,
            position: Position::default(),
        }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn owner(&self) -> Option<DeckId> {
        self.stack.as_ref().map(|info| info.deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_numbering_follows_suit_blocks() {
        assert_eq!(card_identity(0, 4), (Suit::Spade, Rank::Ace));
        assert_eq!(card_identity(12, 4), (Suit::Spade, Rank::King));
        assert_eq!(card_identity(13, 4), (Suit::Heart, Rank::Ace));
        assert_eq!(card_identity(30, 4), (Suit::Club, Rank::Five));
        assert_eq!(card_identity(51, 4), (Suit::Diamond, Rank::King));
    }

    #[test]
    fn spider_suit_folding() {
        // one suit: everything is a spade
        assert_eq!(card_identity(13, 1).0, Suit::Spade);
        assert_eq!(card_identity(103, 1).0, Suit::Spade);
        // two suits alternate spade/heart per block of 13
        assert_eq!(card_identity(26, 2).0, Suit::Spade);
        assert_eq!(card_identity(39, 2).0, Suit::Heart);
        // four suits wrap after the first 52 cards
        assert_eq!(card_identity(52, 4), (Suit::Spade, Rank::Ace));
        assert_eq!(card_identity(103, 4), (Suit::Diamond, Rank::King));
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert_eq!(Rank::from_value(7), Some(Rank::Seven));
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        assert!(Rank::Queen.is_one_below(Rank::King));
        assert!(!Rank::King.is_one_below(Rank::Ace));
        assert!(Rank::Ten < Rank::Jack);
    }

    #[test]
    fn new_card_starts_face_down_and_unowned() {
        let card = Card::from_number(14, 4);
        assert_eq!(card.suit, Suit::Heart);
        assert_eq!(card.rank, Rank::Two);
        assert_eq!(card.color(), CardColor::Red);
        assert!(!card.is_face_up);
        assert!(!card.is_draggable);
        assert_eq!(card.owner(), None);
    }
}
