// src/logic/hints.rs
//! Move discovery for the hint button, tap-to-place and auto-complete.

use log::debug;

use crate::components::position::Position;
use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;
use crate::logic::rules::VariantRules;
use crate::protocol::HintElement;
use crate::world::Board;

/// The two move lists of one board state, both in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HintSet {
    /// Every legal move, for hint cycling and taps.
    pub hints: Vec<HintElement>,
    /// Legal moves that are also safe progress.
    pub auto_complete_hints: Vec<HintElement>,
}

impl HintSet {
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }
}

/// Scans draggable cards (foundations excluded) against every hint target.
///
/// Cards are visited deck by deck in scan order, bottom to top inside a deck,
/// and targets in scan order, so the result is stable for a given board. With
/// `for_auto_complete` set, moves that fail the safety filter are left out of
/// both lists.
///
/// A card sitting in a free cell is never offered another free cell. That
/// move is legal when dragged but changes nothing, and as a hint it would
/// make taps on a parked card shuffle it between cells.
pub fn compute_available_moves(board: &Board, rules: &dyn VariantRules, for_auto_complete: bool) -> HintSet {
    let mut set = HintSet::default();
    let targets: Vec<(DeckId, bool)> = board
        .decks()
        .iter()
        .filter(|deck| rules.is_hint_target(deck.stack_type))
        .map(|deck| (deck.id, deck.stack_type.is_free_cell()))
        .collect();

    for source in board.decks().iter().filter(|deck| !deck.stack_type.is_foundation()) {
        for &entity in source.cards() {
            let Ok(card) = board.card(entity) else {
                continue;
            };
            if !card.is_draggable {
                continue;
            }
            for &(target, target_is_cell) in &targets {
                if target_is_cell && source.stack_type.is_free_cell() {
                    continue;
                }
                if !rules.can_accept(board, target, entity) {
                    continue;
                }
                let safe = rules.allows_auto_complete_move(board, entity, target);
                if for_auto_complete && !safe {
                    continue;
                }
                let hint = HintElement {
                    card: entity,
                    source_deck: source.id,
                    source_position: card.position,
                    target_position: target_position(board, target),
                    destination: target,
                };
                if safe {
                    set.auto_complete_hints.push(hint.clone());
                }
                set.hints.push(hint);
            }
        }
    }
    debug!(
        "[Hint] {} hint(s), {} auto-complete hint(s)",
        set.hints.len(),
        set.auto_complete_hints.len()
    );
    set
}

/// Where a card dropped on `deck` should land: on its top card, or its anchor when empty.
fn target_position(board: &Board, deck: DeckId) -> Position {
    match board.top_of(deck) {
        Ok(Some(top)) => top.position,
        _ => board.deck(deck).map(|deck| deck.anchor).unwrap_or_default(),
    }
}

/// First hint for `card` whose destination is not in `avoid`.
pub fn find_hint_for_card<'a>(hints: &'a [HintElement], card: Entity, avoid: &[DeckId]) -> Option<&'a HintElement> {
    hints
        .iter()
        .find(|hint| hint.card == card && !avoid.contains(&hint.destination))
}

/// Circular walk over the current hint list.
#[derive(Debug, Clone, Default)]
pub struct HintCursor {
    index: usize,
}

impl HintCursor {
    pub fn reset(&mut self) {
        self.index = 0;
    }

    pub fn next<'a>(&mut self, hints: &'a [HintElement]) -> Option<&'a HintElement> {
        if hints.is_empty() {
            return None;
        }
        let hint = &hints[self.index % hints.len()];
        self.index = (self.index + 1) % hints.len();
        Some(hint)
    }
}
