// src/world.rs

use std::collections::HashSet;

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::{Deck, DeckId, StackInfo, StackType};
use crate::config::rules::VariantConfig;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::logic::rules::win_condition::check_win_condition;

/// The whole table: every card of the universe and every deck, in scan order.
///
/// Cards live in an arena indexed by `Entity`; decks only hold handles. The
/// board keeps each card's `StackInfo` in line with the deck that holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    config: VariantConfig,
    cards: Vec<Card>,
    decks: Vec<Deck>,
}

impl Board {
    /// An empty table: cards exist but no deck holds them yet.
    pub fn new(config: VariantConfig, layout: &[StackType], universe_size: usize, suit_count: usize) -> Self {
        let cards = (0..universe_size).map(|number| Card::from_number(number, suit_count)).collect();
        let decks = layout
            .iter()
            .enumerate()
            .map(|(index, &stack_type)| Deck::new(DeckId(index), stack_type))
            .collect();
        Board { config, cards, decks }
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    pub fn universe_size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, card: Entity) -> GameResult<&Card> {
        self.cards.get(card.0).ok_or(GameError::UnknownCard(card))
    }

    pub fn card_mut(&mut self, card: Entity) -> GameResult<&mut Card> {
        self.cards.get_mut(card.0).ok_or(GameError::UnknownCard(card))
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn deck(&self, id: DeckId) -> GameResult<&Deck> {
        self.decks.get(id.0).ok_or(GameError::UnknownDeck(id))
    }

    pub fn deck_mut(&mut self, id: DeckId) -> GameResult<&mut Deck> {
        self.decks.get_mut(id.0).ok_or(GameError::UnknownDeck(id))
    }

    pub fn deck_ids(&self) -> impl Iterator<Item = DeckId> + '_ {
        self.decks.iter().map(|deck| deck.id)
    }

    pub fn foundations(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter().filter(|deck| deck.stack_type.is_foundation())
    }

    pub fn tableaus(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter().filter(|deck| deck.stack_type.is_tableau())
    }

    pub fn free_cells(&self) -> impl Iterator<Item = &Deck> {
        self.decks.iter().filter(|deck| deck.stack_type.is_free_cell())
    }

    pub fn find_deck(&self, stack_type: StackType) -> Option<DeckId> {
        self.decks.iter().find(|deck| deck.stack_type == stack_type).map(|deck| deck.id)
    }

    pub fn stock_id(&self) -> Option<DeckId> {
        self.find_deck(StackType::Stock)
    }

    pub fn waste_id(&self) -> Option<DeckId> {
        self.find_deck(StackType::Waste)
    }

    /// The deck currently holding `card`.
    pub fn owner_of(&self, card: Entity) -> GameResult<DeckId> {
        self.card(card)?.owner().ok_or(GameError::UnknownCard(card))
    }

    pub fn top_of(&self, deck: DeckId) -> GameResult<Option<&Card>> {
        match self.deck(deck)?.top_card() {
            Some(top) => self.card(top).map(Some),
            None => Ok(None),
        }
    }

    /// Cards of a deck, bottom first.
    pub fn cards_in(&self, deck: DeckId) -> GameResult<Vec<&Card>> {
        self.deck(deck)?.cards().iter().map(|&card| self.card(card)).collect()
    }

    /// Pushes a card onto a deck. Used while dealing, when the card has no owner yet.
    pub fn place(&mut self, card: Entity, deck: DeckId) -> GameResult<()> {
        self.card(card)?;
        self.deck_mut(deck)?.push(card);
        self.sync_deck(deck)
    }

    /// Pops the top card of `from` and pushes it onto `to`.
    pub fn move_top(&mut self, from: DeckId, to: DeckId) -> GameResult<Option<Entity>> {
        let card = match self.deck_mut(from)?.pop() {
            Some(card) => card,
            None => return Ok(None),
        };
        self.deck_mut(to)?.push(card);
        self.sync_deck(from)?;
        self.sync_deck(to)?;
        Ok(Some(card))
    }

    /// Moves `card` and everything above it from `from` onto `to`, order kept.
    pub fn transfer(&mut self, from: DeckId, card: Entity, to: DeckId) -> GameResult<Vec<Entity>> {
        self.deck(to)?;
        let run = self.deck_mut(from)?.pop_from(card);
        if run.is_empty() {
            return Err(GameError::InvalidMove { card });
        }
        self.deck_mut(to)?.push_all(run.iter().copied());
        self.sync_deck(from)?;
        self.sync_deck(to)?;
        Ok(run)
    }

    /// Replaces the content of a deck wholesale. Restores use this.
    pub(crate) fn replace_deck_cards(&mut self, deck: DeckId, cards: Vec<Entity>) -> GameResult<()> {
        let target = self.deck_mut(deck)?;
        target.clear();
        target.push_all(cards);
        self.sync_deck(deck)
    }

    /// Rewrites the `StackInfo` of every card in `deck`.
    pub fn sync_deck(&mut self, deck: DeckId) -> GameResult<()> {
        let Board { cards, decks, .. } = self;
        let target = decks.get(deck.0).ok_or(GameError::UnknownDeck(deck))?;
        for (index, &entity) in target.cards().iter().enumerate() {
            let card = cards.get_mut(entity.0).ok_or(GameError::UnknownCard(entity))?;
            card.stack = Some(StackInfo::new(deck, index));
        }
        Ok(())
    }

    /// Turns the top card of a deck face up. Returns true when it was face down.
    pub fn flip_top_face_up(&mut self, deck: DeckId) -> GameResult<bool> {
        let top = match self.deck(deck)?.top_card() {
            Some(top) => top,
            None => return Ok(false),
        };
        let card = self.card_mut(top)?;
        let flipped = !card.is_face_up;
        card.is_face_up = true;
        Ok(flipped)
    }

    pub fn set_deck_anchor(&mut self, deck: DeckId, anchor: Position) -> GameResult<()> {
        self.deck_mut(deck)?.anchor = anchor;
        Ok(())
    }

    pub fn set_card_position(&mut self, card: Entity, position: Position) -> GameResult<()> {
        self.card_mut(card)?.position = position;
        Ok(())
    }

    /// True iff every foundation holds a complete suit.
    pub fn has_won(&self) -> bool {
        check_win_condition(self.foundations().map(Deck::count))
    }

    /// Checks card conservation: every card of the universe sits in exactly one
    /// deck, and its `StackInfo` points back at that deck and index.
    pub fn check_invariants(&self) -> GameResult<()> {
        let mut seen = HashSet::with_capacity(self.cards.len());
        for deck in &self.decks {
            for (index, &entity) in deck.cards().iter().enumerate() {
                let card = self.card(entity)?;
                if !seen.insert(entity) {
                    return Err(GameError::CorruptSnapshot(format!("{} appears twice", entity)));
                }
                if card.stack != Some(StackInfo::new(deck.id, index)) {
                    return Err(GameError::CorruptSnapshot(format!(
                        "{} thinks it is at {:?}, found in {} at {}",
                        entity, card.stack, deck.id, index
                    )));
                }
            }
        }
        if seen.len() != self.cards.len() {
            return Err(GameError::CorruptSnapshot(format!(
                "{} of {} cards are on the table",
                seen.len(),
                self.cards.len()
            )));
        }
        Ok(())
    }
}
