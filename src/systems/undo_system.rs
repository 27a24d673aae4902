// src/systems/undo_system.rs

use std::collections::HashSet;

use log::{info, warn};

use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult, UndoBlock};
use crate::logic::rules::{refresh_all_draggable, VariantRules};
use crate::protocol::{CardRecord, DeckRecord, UndoSnapshot};
use crate::world::Board;

/// What `undo` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The board was put back to the previous state.
    Restored,
    /// The top entry was dropped without touching the board.
    Discarded,
}

/// LIFO stack of pre-move board snapshots, with an optional undo budget.
#[derive(Debug, Clone, Default)]
pub struct UndoManager {
    states: Vec<UndoSnapshot>,
    countable: bool,
    available: u32,
}

impl UndoManager {
    pub fn new(countable: bool, credits: u32) -> Self {
        UndoManager { states: Vec::new(), countable, available: credits }
    }

    pub fn states(&self) -> &[UndoSnapshot] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_countable(&self) -> bool {
        self.countable
    }

    pub fn available_credits(&self) -> u32 {
        self.available
    }

    pub fn grant_credits(&mut self, credits: u32) {
        self.available = self.available.saturating_add(credits);
        info!("[Undo] {} credit(s) available", self.available);
    }

    /// Clears the stack and puts the budget back to `credits`.
    pub fn reset(&mut self, countable: bool, credits: u32) {
        self.states.clear();
        self.countable = countable;
        self.available = credits;
    }

    /// Rebuilds a manager from a persisted stack.
    pub fn from_saved(states: Vec<UndoSnapshot>, countable: bool, credits: u32) -> Self {
        UndoManager { states, countable, available: credits }
    }

    /// Records the current board. Temporary entries mark pause/resume and saves.
    pub fn snapshot(&mut self, board: &Board, is_temporary: bool) {
        self.states.push(capture(board, is_temporary));
    }

    /// Drops every temporary entry.
    pub fn drop_temporary(&mut self) {
        self.states.retain(|state| !state.is_temporary);
    }

    /// Steps back one entry.
    ///
    /// With `remove_only_top` the top entry is just discarded, temporary or
    /// not. Otherwise the board is restored from the newest real entry:
    /// temporary entries stacked above it (pause marks, save marks) are
    /// board copies, not moves, so they are skipped and dropped with it. In
    /// countable mode a restore costs one credit and is refused at zero,
    /// before anything is dropped. A corrupt entry is dropped and the board
    /// left as is.
    pub fn undo(&mut self, board: &mut Board, rules: &dyn VariantRules, remove_only_top: bool) -> GameResult<UndoOutcome> {
        if self.states.is_empty() {
            return Err(GameError::UndoUnavailable(UndoBlock::EmptyStack));
        }
        if remove_only_top {
            self.states.pop();
            return Ok(UndoOutcome::Discarded);
        }
        let Some(newest_real) = self.states.iter().rposition(|state| !state.is_temporary) else {
            return Err(GameError::UndoUnavailable(UndoBlock::EmptyStack));
        };
        if self.countable && self.available == 0 {
            warn!("[Undo] out of undo credits");
            return Err(GameError::UndoUnavailable(UndoBlock::NeedsCredits));
        }

        self.states.truncate(newest_real + 1);
        let Some(snapshot) = self.states.pop() else {
            return Err(GameError::UndoUnavailable(UndoBlock::EmptyStack));
        };
        if let Err(err) = restore(board, rules, &snapshot) {
            warn!("[Undo] dropped a corrupt snapshot: {}", err);
            return Err(err);
        }
        if self.countable {
            self.available -= 1;
        }
        info!("[Undo] restored, {} state(s) left", self.states.len());
        Ok(UndoOutcome::Restored)
    }

    /// Puts the board to the newest entry and keeps the entry on the stack.
    pub fn restore_latest(&self, board: &mut Board, rules: &dyn VariantRules) -> GameResult<()> {
        let Some(snapshot) = self.states.last() else {
            return Err(GameError::UndoUnavailable(UndoBlock::EmptyStack));
        };
        restore(board, rules, snapshot)
    }

    /// True when the newest entry is a pause or save mark rather than a move.
    pub fn top_is_temporary(&self) -> bool {
        self.states.last().map_or(false, |state| state.is_temporary)
    }
}

/// Deep copy of every deck and every card's mutable state.
pub fn capture(board: &Board, is_temporary: bool) -> UndoSnapshot {
    let decks = board
        .decks()
        .iter()
        .map(|deck| DeckRecord {
            deck_id: deck.id,
            cards: deck
                .cards()
                .iter()
                .enumerate()
                .filter_map(|(stack_index, &entity)| {
                    board.card(entity).ok().map(|card| CardRecord {
                        number: card.number,
                        suit: card.suit,
                        rank: card.rank,
                        face_up: card.is_face_up,
                        draggable: card.is_draggable,
                        stack_index,
                        deck_id: deck.id,
                        position: card.position,
                    })
                })
                .collect(),
        })
        .collect();
    UndoSnapshot { is_temporary, decks }
}

/// Puts the board back to `snapshot`.
///
/// The snapshot is checked in full before anything is written, so a corrupt
/// one leaves the board untouched.
pub fn restore(board: &mut Board, rules: &dyn VariantRules, snapshot: &UndoSnapshot) -> GameResult<()> {
    validate(board, snapshot)?;
    for record in &snapshot.decks {
        let cards: Vec<Entity> = record.cards.iter().map(|card| Entity(card.number)).collect();
        board.replace_deck_cards(record.deck_id, cards)?;
        for saved in &record.cards {
            let card = board.card_mut(Entity(saved.number))?;
            card.is_face_up = saved.face_up;
            card.is_draggable = saved.draggable;
            card.position = saved.position;
        }
    }
    refresh_all_draggable(board, rules)?;
    board.check_invariants()
}

fn validate(board: &Board, snapshot: &UndoSnapshot) -> GameResult<()> {
    let corrupt = |reason: String| Err(GameError::CorruptSnapshot(reason));
    if snapshot.decks.len() != board.decks().len() {
        return corrupt(format!("{} deck records for {} decks", snapshot.decks.len(), board.decks().len()));
    }
    let mut decks_seen: HashSet<DeckId> = HashSet::new();
    let mut cards_seen: HashSet<usize> = HashSet::new();
    for record in &snapshot.decks {
        if board.deck(record.deck_id).is_err() || !decks_seen.insert(record.deck_id) {
            return corrupt(format!("bad deck reference {}", record.deck_id));
        }
        for (index, saved) in record.cards.iter().enumerate() {
            let Ok(card) = board.card(Entity(saved.number)) else {
                return corrupt(format!("unknown card number {}", saved.number));
            };
            if card.suit != saved.suit || card.rank != saved.rank {
                return corrupt(format!("card {} changed identity", saved.number));
            }
            if saved.deck_id != record.deck_id || saved.stack_index != index {
                return corrupt(format!("card {} is filed under the wrong slot", saved.number));
            }
            if !cards_seen.insert(saved.number) {
                return corrupt(format!("card {} appears twice", saved.number));
            }
        }
    }
    if cards_seen.len() != board.universe_size() {
        return corrupt(format!("{} of {} cards recorded", cards_seen.len(), board.universe_size()));
    }
    Ok(())
}
