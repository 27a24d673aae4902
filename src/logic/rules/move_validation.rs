//! Whole-move checks on top of the per-deck acceptance rules.

use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::logic::rules::VariantRules;
use crate::world::Board;

/// Checks that `card` may be picked up and dropped on `target`.
pub fn validate_move(board: &Board, rules: &dyn VariantRules, card: Entity, target: DeckId) -> GameResult<()> {
    if !board.card(card)?.is_draggable {
        return Err(GameError::CardNotDraggable { card });
    }
    board.deck(target)?;
    if rules.can_accept(board, target, card) {
        Ok(())
    } else {
        Err(GameError::InvalidMove { card })
    }
}

/// First deck among `candidates` that accepts `card`, in board scan order.
pub fn first_accepting_target(
    board: &Board,
    rules: &dyn VariantRules,
    card: Entity,
    candidates: &[DeckId],
) -> Option<DeckId> {
    let mut ordered = candidates.to_vec();
    ordered.sort();
    ordered.dedup();
    ordered.into_iter().find(|&target| rules.can_accept(board, target, card))
}
