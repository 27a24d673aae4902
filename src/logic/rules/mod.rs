//! Per-variant rules behind one trait, plus the shared predicates they use.

pub mod common;
pub mod foundation;
pub mod freecell;
pub mod klondike;
pub mod move_validation;
pub mod spider;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;

#[cfg(test)]
mod tests;

pub use foundation::can_move_to_foundation;
pub use freecell::FreecellRules;
pub use klondike::KlondikeRules;
pub use move_validation::{first_accepting_target, validate_move};
pub use spider::SpiderRules;
pub use stock_waste::{can_deal_from_stock, can_reset_stock_from_waste};
pub use tableau::{can_build_down_any_suit, can_move_to_tableau, EmptyTableau};
pub use win_condition::check_win_condition;

use crate::components::card::ALL_SUITS;
use crate::components::stack::{DeckId, StackType};
use crate::config::rules::{Variant, VariantConfig};
use crate::config::scoring::ScoringConfig;
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::world::Board;

/// What a tap on the stock did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockOutcome {
    /// Cards turned from stock to waste, in draw order.
    Drawn(Vec<Entity>),
    /// Number of waste cards returned to the stock.
    Recycled(usize),
    /// One card dealt to each tableau, and each completed run as (tableau, foundation).
    Dealt { cards: Vec<(Entity, DeckId)>, completed: Vec<(DeckId, DeckId)> },
    /// The variant has no stock.
    NoStock,
}

/// Game rules of one variant. Chosen once per deal and handed to the executor,
/// the hint engine and the undo manager.
pub trait VariantRules {
    fn config(&self) -> &VariantConfig;

    fn variant(&self) -> Variant {
        self.config().variant()
    }

    /// 52 or 104.
    fn card_universe_size(&self) -> usize;

    fn suit_count(&self) -> usize {
        ALL_SUITS.len()
    }

    /// Deck kinds in scan order. `DeckId(i)` is the i-th entry.
    fn deck_layout(&self) -> Vec<StackType>;

    /// Distributes an empty board's cards from `order`.
    ///
    /// The order is read as a face-down pile with `order[0]` at the bottom,
    /// so the last entry is dealt first. Klondike and Spider push the whole
    /// order onto the stock and pop columns off it, leaving the first
    /// entries in the stock. Freecell deals every card, round robin from the
    /// last entry. The Easy reordering works on the same reading: the tail
    /// of the order is the tableau part, the head the stock part.
    fn deal_initial_layout(&self, board: &mut Board, order: &[usize]) -> GameResult<()>;

    /// Whether `card` (with the cards above it) may land on `target` now.
    /// Never mutates and never logs; the hint scan calls it for every pair.
    fn can_accept(&self, board: &Board, target: DeckId, card: Entity) -> bool;

    /// Recomputes `is_draggable` for every card of `deck`.
    fn update_draggable(&self, board: &mut Board, deck: DeckId) -> GameResult<()>;

    /// Plays a tap on the stock. Variants without a stock answer `NoStock`;
    /// a stock that cannot act right now is `StockUnavailable`.
    fn on_stock_click(&self, board: &mut Board) -> GameResult<StockOutcome>;

    /// Largest run that may move as one unit, when the variant limits it.
    fn super_move_limit(&self, _board: &Board) -> Option<usize> {
        None
    }

    /// Moves a completed King-to-Ace run off `deck`. Returns the foundation it went to.
    fn try_auto_collapse_run(&self, _board: &mut Board, _deck: DeckId) -> GameResult<Option<DeckId>> {
        Ok(None)
    }

    /// Decks the hint engine searches for destinations.
    fn is_hint_target(&self, stack_type: StackType) -> bool {
        stack_type.is_tableau() || stack_type.is_foundation() || stack_type.is_free_cell()
    }

    /// Whether a legal move also counts as safe progress for auto-complete.
    fn allows_auto_complete_move(&self, board: &Board, card: Entity, target: DeckId) -> bool;

    /// Score for a successful move onto a deck of kind `target`.
    fn move_score(&self, scoring: &ScoringConfig, target: StackType) -> i32;
}

/// Rules object for a configuration.
pub fn rules_for(config: &VariantConfig) -> Box<dyn VariantRules> {
    match config {
        VariantConfig::Klondike { .. } => Box::new(KlondikeRules::new(*config)),
        VariantConfig::Spider { .. } => Box::new(SpiderRules::new(*config)),
        VariantConfig::Freecell { .. } => Box::new(FreecellRules::new(*config)),
    }
}

/// Recomputes draggability of every deck.
pub fn refresh_all_draggable(board: &mut Board, rules: &dyn VariantRules) -> GameResult<()> {
    let ids: Vec<DeckId> = board.deck_ids().collect();
    for id in ids {
        rules.update_draggable(board, id)?;
    }
    Ok(())
}
