// src/components/stack.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::position::Position;
use crate::ecs::entity::Entity;

/// Index of a deck in the board's scan order.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeckId(pub usize);

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deck#{}", self.0)
    }
}

/// Kind of pile a deck is, with its index among piles of the same kind.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// Ace deck, built up by suit from the Ace.
    Foundation(u8),
    /// Bottom deck, the main playing columns.
    Tableau(u8),
    /// Face-up cards drawn from the stock (Klondike).
    Waste,
    /// Face-down reserve (the pack).
    Stock,
    /// Single-card holding slot (Freecell).
    FreeCell(u8),
}

impl StackType {
    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    pub fn is_free_cell(self) -> bool {
        matches!(self, StackType::FreeCell(_))
    }
}

/// Where a card currently lives: its deck and its index from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackInfo {
    pub deck: DeckId,
    pub position_in_stack: usize,
}

impl StackInfo {
    pub fn new(deck: DeckId, position_in_stack: usize) -> Self {
        Self { deck, position_in_stack }
    }
}

/// An ordered pile of cards, bottom first.
///
/// Every mutation here is local to the deck. Moving cards between decks is a
/// pop on one deck followed by a push on the other, done by the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub stack_type: StackType,
    pub anchor: Position,
    cards: Vec<Entity>,
}

impl Deck {
    pub fn new(id: DeckId, stack_type: StackType) -> Self {
        Deck { id, stack_type, anchor: Position::default(), cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Entity] {
        &self.cards
    }

    pub fn push(&mut self, card: Entity) {
        self.cards.push(card);
    }

    pub fn push_all<I: IntoIterator<Item = Entity>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    pub fn pop(&mut self) -> Option<Entity> {
        self.cards.pop()
    }

    /// Removes `card` and everything stacked above it, bottom first.
    /// Returns an empty run when the card is not in this deck.
    pub fn pop_from(&mut self, card: Entity) -> Vec<Entity> {
        match self.index_of(card) {
            Some(index) => self.cards.split_off(index),
            None => Vec::new(),
        }
    }

    pub fn top_card(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn remove_subset(&mut self, cards: &[Entity]) {
        self.cards.retain(|card| !cards.contains(card));
    }

    pub fn contains(&self, card: Entity) -> bool {
        self.cards.contains(&card)
    }

    pub fn index_of(&self, card: Entity) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// The card directly beneath `card`.
    pub fn previous_of(&self, card: Entity) -> Option<Entity> {
        let index = self.index_of(card)?;
        index.checked_sub(1).map(|below| self.cards[below])
    }

    /// Number of cards from `card` up to the top, inclusive. Zero when absent.
    pub fn amount_from(&self, card: Entity) -> usize {
        self.index_of(card).map_or(0, |index| self.cards.len() - index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_with(cards: &[usize]) -> Deck {
        let mut deck = Deck::new(DeckId(0), StackType::Tableau(0));
        deck.push_all(cards.iter().map(|&n| Entity(n)));
        deck
    }

    #[test]
    fn pop_from_takes_run_in_order() {
        let mut deck = deck_with(&[5, 9, 2, 7]);
        let run = deck.pop_from(Entity(9));
        assert_eq!(run, vec![Entity(9), Entity(2), Entity(7)]);
        assert_eq!(deck.cards(), &[Entity(5)]);
    }

    #[test]
    fn pop_from_missing_card_is_empty() {
        let mut deck = deck_with(&[5, 9]);
        assert!(deck.pop_from(Entity(40)).is_empty());
        assert_eq!(deck.count(), 2, "deck must be untouched");
    }

    #[test]
    fn top_previous_and_amount() {
        let deck = deck_with(&[1, 2, 3]);
        assert_eq!(deck.top_card(), Some(Entity(3)));
        assert_eq!(deck.previous_of(Entity(3)), Some(Entity(2)));
        assert_eq!(deck.previous_of(Entity(1)), None);
        assert_eq!(deck.amount_from(Entity(2)), 2);
        assert_eq!(deck.amount_from(Entity(99)), 0);
    }

    #[test]
    fn remove_subset_keeps_order_of_the_rest() {
        let mut deck = deck_with(&[1, 2, 3, 4, 5]);
        deck.remove_subset(&[Entity(2), Entity(4)]);
        assert_eq!(deck.cards(), &[Entity(1), Entity(3), Entity(5)]);
        deck.clear();
        assert!(deck.is_empty());
        assert_eq!(deck.pop(), None);
    }

    #[test]
    fn stack_type_kinds() {
        assert!(StackType::Foundation(2).is_foundation());
        assert!(StackType::Tableau(0).is_tableau());
        assert!(StackType::FreeCell(1).is_free_cell());
        assert!(!StackType::Waste.is_tableau());
        let info = StackInfo::new(DeckId(4), 3);
        assert_eq!(info.deck, DeckId(4));
        assert_eq!(info.position_in_stack, 3);
    }
}
