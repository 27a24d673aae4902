//! Freecell: everything dealt face up, free cells as single-card parking.

use crate::components::stack::{DeckId, StackType};
use crate::config::layout::{FREECELL_FOUNDATION_COUNT, FREECELL_TABLEAU_COUNT, STANDARD_DECK_SIZE};
use crate::config::rules::VariantConfig;
use crate::config::scoring::ScoringConfig;
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::world::Board;

use super::common::{alternating_colors, mark_run_from_top, mark_top, shuffles_without_progress, MoveContext};
use super::foundation::can_move_to_foundation;
use super::tableau::{can_move_to_tableau, EmptyTableau};
use super::{StockOutcome, VariantRules};

pub struct FreecellRules {
    config: VariantConfig,
    free_cells: usize,
}

impl FreecellRules {
    pub fn new(config: VariantConfig) -> Self {
        FreecellRules { config, free_cells: config.effective_free_cells() }
    }
}

impl VariantRules for FreecellRules {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn card_universe_size(&self) -> usize {
        STANDARD_DECK_SIZE
    }

    fn deck_layout(&self) -> Vec<StackType> {
        let foundations = (0..FREECELL_FOUNDATION_COUNT as u8).map(StackType::Foundation);
        let tableaus = (0..FREECELL_TABLEAU_COUNT as u8).map(StackType::Tableau);
        let cells = (0..self.free_cells as u8).map(StackType::FreeCell);
        foundations.chain(tableaus).chain(cells).collect()
    }

    fn deal_initial_layout(&self, board: &mut Board, order: &[usize]) -> GameResult<()> {
        let tableaus: Vec<DeckId> = board.tableaus().map(|deck| deck.id).collect();
        // order[51] to column 0, order[50] to column 1, ... wrapping every 8
        for (slot, &number) in order.iter().rev().enumerate() {
            let card = Entity(number);
            board.place(card, tableaus[slot % tableaus.len()])?;
            board.card_mut(card)?.is_face_up = true;
        }
        Ok(())
    }

    fn can_accept(&self, board: &Board, target: DeckId, card: Entity) -> bool {
        let Some(ctx) = MoveContext::new(board, target, card) else {
            return false;
        };
        match ctx.target.stack_type {
            StackType::Foundation(_) => ctx.is_single() && can_move_to_foundation(ctx.card, ctx.target_top),
            StackType::Tableau(_) => {
                let limit = self.super_move_limit(board).unwrap_or(1);
                ctx.run_len() <= limit && can_move_to_tableau(ctx.card, ctx.target_top, EmptyTableau::AnyCard)
            }
            // a parked card may also change cells
            StackType::FreeCell(_) => ctx.target.is_empty() && ctx.is_single(),
            StackType::Waste | StackType::Stock => false,
        }
    }

    fn update_draggable(&self, board: &mut Board, deck: DeckId) -> GameResult<()> {
        match board.deck(deck)?.stack_type {
            StackType::Tableau(_) => mark_run_from_top(board, deck, alternating_colors),
            StackType::FreeCell(_) => mark_top(board, deck, 1),
            _ => mark_top(board, deck, 0),
        }
    }

    fn on_stock_click(&self, _board: &mut Board) -> GameResult<StockOutcome> {
        Ok(StockOutcome::NoStock)
    }

    /// `(empty free cells + 1) * 2^(empty tableaus)`.
    fn super_move_limit(&self, board: &Board) -> Option<usize> {
        let empty_cells = board.free_cells().filter(|deck| deck.is_empty()).count();
        let empty_tableaus = board.tableaus().filter(|deck| deck.is_empty()).count() as u32;
        Some((empty_cells + 1) * 2usize.pow(empty_tableaus))
    }

    fn allows_auto_complete_move(&self, board: &Board, card: Entity, target: DeckId) -> bool {
        let Some(ctx) = MoveContext::new(board, target, card) else {
            return false;
        };
        let parks_on_empty = ctx.target.is_empty() && !ctx.target.stack_type.is_foundation();
        !parks_on_empty && !shuffles_without_progress(&ctx, board, true)
    }

    fn move_score(&self, scoring: &ScoringConfig, target: StackType) -> i32 {
        if target.is_foundation() {
            scoring.move_to_foundation
        } else {
            0
        }
    }
}
