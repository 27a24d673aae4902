// src/systems/move_card_system.rs

use log::{info, warn};

use crate::components::stack::DeckId;
use crate::config::scoring::ScoringConfig;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::logic::rules::{first_accepting_target, validate_move, VariantRules};
use crate::protocol::HintElement;
use crate::systems::undo_system::UndoManager;
use crate::world::Board;

/// Result of one applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub card: Entity,
    /// The whole run that moved, bottom first.
    pub moved: Vec<Entity>,
    pub from: DeckId,
    pub to: DeckId,
    pub score_delta: i32,
    /// Foundations filled by runs the move completed.
    pub completed: Vec<DeckId>,
}

/// Validates and applies card moves.
///
/// A move either fully happens (snapshot recorded, cards transferred,
/// draggability refreshed on both decks) or leaves the board untouched.
pub struct MoveCardSystem;

impl MoveCardSystem {
    /// Drops `card` on the first deck among `candidates` that accepts it, in
    /// board scan order.
    pub fn attempt_move(
        board: &mut Board,
        rules: &dyn VariantRules,
        scoring: &ScoringConfig,
        undo: &mut UndoManager,
        card: Entity,
        candidates: &[DeckId],
    ) -> GameResult<MoveReport> {
        if !board.card(card)?.is_draggable {
            warn!("[Move] {} is not draggable", card);
            return Err(GameError::CardNotDraggable { card });
        }
        let from = board.owner_of(card)?;
        let Some(to) = first_accepting_target(board, rules, card, candidates) else {
            warn!("[Move] no candidate accepts {}", card);
            return Err(GameError::InvalidMove { card });
        };
        Self::apply(board, rules, scoring, undo, card, from, to)
    }

    /// Plays a hint found earlier. Stale hints are rejected.
    pub fn apply_hint(
        board: &mut Board,
        rules: &dyn VariantRules,
        scoring: &ScoringConfig,
        undo: &mut UndoManager,
        hint: &HintElement,
    ) -> GameResult<MoveReport> {
        validate_move(board, rules, hint.card, hint.destination)?;
        let from = board.owner_of(hint.card)?;
        if from != hint.source_deck {
            return Err(GameError::InvalidMove { card: hint.card });
        }
        Self::apply(board, rules, scoring, undo, hint.card, from, hint.destination)
    }

    fn apply(
        board: &mut Board,
        rules: &dyn VariantRules,
        scoring: &ScoringConfig,
        undo: &mut UndoManager,
        card: Entity,
        from: DeckId,
        to: DeckId,
    ) -> GameResult<MoveReport> {
        undo.snapshot(board, false);
        let moved = match board.transfer(from, card, to) {
            Ok(moved) => moved,
            Err(err) => {
                undo.undo(board, rules, true)?;
                return Err(err);
            }
        };

        if board.deck(from)?.stack_type.is_tableau() {
            board.flip_top_face_up(from)?;
        }
        rules.update_draggable(board, from)?;
        rules.update_draggable(board, to)?;

        let mut score_delta = rules.move_score(scoring, board.deck(to)?.stack_type);
        let mut completed = Vec::new();
        if let Some(foundation) = rules.try_auto_collapse_run(board, to)? {
            score_delta += scoring.run_completed;
            completed.push(foundation);
        }

        info!("[Move] {} ({} card(s)) {} -> {}", card, moved.len(), from, to);
        Ok(MoveReport { card, moved, from, to, score_delta, completed })
    }
}
