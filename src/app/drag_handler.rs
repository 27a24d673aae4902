// src/app/drag_handler.rs
//! Pointer input: drag start/move/end, taps on cards and the hint button.

use log::{info, warn};

use crate::components::dragging_info::DraggingInfo;
use crate::components::position::Position;
use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::logic::hints::find_hint_for_card;
use crate::protocol::{GameEvent, HintElement, SoundIntent};
use crate::systems::move_card_system::{MoveCardSystem, MoveReport};

use super::game_app::GameApp;

impl GameApp {
    /// Picks up `card` and the cards above it.
    pub fn drag_start(&mut self, card: Entity) -> GameResult<()> {
        self.ensure_idle()?;
        if !self.board.card(card)?.is_draggable {
            self.reject(card);
            return Err(GameError::CardNotDraggable { card });
        }
        let original_deck = self.board.owner_of(card)?;
        let deck = self.board.deck(original_deck)?;
        let start = deck.index_of(card).unwrap_or(0);
        let original_positions = deck.cards()[start..]
            .iter()
            .filter_map(|&entity| self.board.card(entity).ok().map(|c| (entity, c.position)))
            .collect();
        self.dragging = Some(DraggingInfo { card, original_deck, original_positions });
        Ok(())
    }

    /// Moves the held run so that `card` sits at `position`.
    pub fn drag_move(&mut self, card: Entity, position: Position) -> GameResult<()> {
        let Some(info) = self.dragging.as_ref().filter(|info| info.card == card) else {
            return Ok(());
        };
        let Some(&(_, anchor)) = info.original_positions.first() else {
            return Ok(());
        };
        let (dx, dy) = (position.x - anchor.x, position.y - anchor.y);
        let moves: Vec<(Entity, Position)> = info
            .original_positions
            .iter()
            .map(|&(entity, start)| (entity, start.offset(dx, dy)))
            .collect();
        for (entity, at) in moves {
            self.board.set_card_position(entity, at)?;
        }
        Ok(())
    }

    /// Drops the held card over `overlapping` decks. The first deck in scan
    /// order that accepts it wins; on rejection the run snaps back.
    pub fn drag_end(&mut self, card: Entity, overlapping: &[DeckId]) -> GameResult<MoveReport> {
        let dragging = self.dragging.take();
        self.ensure_idle()?;
        let result = MoveCardSystem::attempt_move(
            &mut self.board,
            self.rules.as_ref(),
            &self.config.scoring,
            &mut self.undo,
            card,
            overlapping,
        );
        match result {
            Ok(report) => {
                self.tap_history = None;
                self.after_move(&report);
                Ok(report)
            }
            Err(err) => {
                if let Some(info) = dragging {
                    for (entity, start) in info.original_positions {
                        self.board.set_card_position(entity, start)?;
                    }
                }
                self.reject(card);
                Err(err)
            }
        }
    }

    /// Tap-to-place: plays the first hint for `card`.
    ///
    /// Repeated taps on the same card skip decks it already sat in during the
    /// sequence, so it cycles forward instead of bouncing back.
    pub fn tap(&mut self, card: Entity) -> GameResult<MoveReport> {
        self.ensure_idle()?;
        let mut visited = match self.tap_history.take() {
            Some((previous, visited)) if previous == card => visited,
            _ => Vec::new(),
        };
        let hint = find_hint_for_card(&self.hints.hints, card, &visited)
            .or_else(|| find_hint_for_card(&self.hints.hints, card, &[]))
            .cloned();
        let Some(hint) = hint else {
            warn!("[Hint] no move available for {}", card);
            self.emit(GameEvent::HintUnavailable { card: Some(card) });
            self.emit(GameEvent::Sound(SoundIntent::Error));
            return Err(GameError::HintTargetNotFound { card });
        };

        let report = match MoveCardSystem::apply_hint(
            &mut self.board,
            self.rules.as_ref(),
            &self.config.scoring,
            &mut self.undo,
            &hint,
        ) {
            Ok(report) => report,
            Err(err) => {
                self.reject(card);
                return Err(err);
            }
        };
        if !visited.contains(&hint.source_deck) {
            visited.push(hint.source_deck);
        }
        self.tap_history = Some((card, visited));
        self.after_move(&report);
        Ok(report)
    }

    /// Next hint in the circular walk, for the hint button.
    pub fn next_hint(&mut self) -> Option<HintElement> {
        let hint = self.hint_cursor.next(&self.hints.hints).cloned();
        match &hint {
            Some(hint) => info!("[Hint] {} -> {}", hint.card, hint.destination),
            None => self.emit(GameEvent::HintUnavailable { card: None }),
        }
        hint
    }

    pub(crate) fn reject(&mut self, card: Entity) {
        self.emit(GameEvent::MoveRejected { card });
        self.emit(GameEvent::Sound(SoundIntent::Error));
    }
}
