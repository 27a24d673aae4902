//! Klondike: seven tableaus, a stock drawn one or three at a time.

use log::debug;

use crate::components::stack::{DeckId, StackType};
use crate::config::layout::{KLONDIKE_FOUNDATION_COUNT, KLONDIKE_TABLEAU_COUNT, STANDARD_DECK_SIZE};
use crate::config::rules::{DrawRule, VariantConfig};
use crate::config::scoring::ScoringConfig;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::world::Board;

use super::common::{alternating_colors, mark_run_from_top, mark_top, shuffles_without_progress, MoveContext};
use super::foundation::can_move_to_foundation;
use super::stock_waste::{can_deal_from_stock, can_reset_stock_from_waste, draw_to_waste, recycle_waste};
use super::tableau::{can_move_to_tableau, EmptyTableau};
use super::{StockOutcome, VariantRules};

pub struct KlondikeRules {
    config: VariantConfig,
    draw: DrawRule,
}

impl KlondikeRules {
    pub fn new(config: VariantConfig) -> Self {
        let draw = match config {
            VariantConfig::Klondike { draw, .. } => draw,
            _ => DrawRule::default(),
        };
        KlondikeRules { config, draw }
    }

    fn stock_and_waste(board: &Board) -> GameResult<(DeckId, DeckId)> {
        match (board.stock_id(), board.waste_id()) {
            (Some(stock), Some(waste)) => Ok((stock, waste)),
            _ => Err(GameError::StockUnavailable),
        }
    }
}

impl VariantRules for KlondikeRules {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn card_universe_size(&self) -> usize {
        STANDARD_DECK_SIZE
    }

    fn deck_layout(&self) -> Vec<StackType> {
        let foundations = (0..KLONDIKE_FOUNDATION_COUNT as u8).map(StackType::Foundation);
        let tableaus = (0..KLONDIKE_TABLEAU_COUNT as u8).map(StackType::Tableau);
        foundations.chain(tableaus).chain([StackType::Waste, StackType::Stock]).collect()
    }

    // 1..=7 cards per column, left to right, each popped off the stock top.
    fn deal_initial_layout(&self, board: &mut Board, order: &[usize]) -> GameResult<()> {
        let (stock, _) = Self::stock_and_waste(board)?;
        for &number in order {
            board.place(Entity(number), stock)?;
        }
        let tableaus: Vec<DeckId> = board.tableaus().map(|deck| deck.id).collect();
        for (column, &tableau) in tableaus.iter().enumerate() {
            for _ in 0..=column {
                board.move_top(stock, tableau)?;
            }
            board.flip_top_face_up(tableau)?;
        }
        Ok(())
    }

    fn can_accept(&self, board: &Board, target: DeckId, card: Entity) -> bool {
        let Some(ctx) = MoveContext::new(board, target, card) else {
            return false;
        };
        match ctx.target.stack_type {
            StackType::Foundation(_) => ctx.is_single() && can_move_to_foundation(ctx.card, ctx.target_top),
            StackType::Tableau(_) => can_move_to_tableau(ctx.card, ctx.target_top, EmptyTableau::KingOnly),
            StackType::Waste | StackType::Stock | StackType::FreeCell(_) => false,
        }
    }

    fn update_draggable(&self, board: &mut Board, deck: DeckId) -> GameResult<()> {
        match board.deck(deck)?.stack_type {
            StackType::Tableau(_) => mark_run_from_top(board, deck, alternating_colors),
            StackType::Waste | StackType::Foundation(_) => mark_top(board, deck, 1),
            StackType::Stock | StackType::FreeCell(_) => mark_top(board, deck, 0),
        }
    }

    fn on_stock_click(&self, board: &mut Board) -> GameResult<StockOutcome> {
        let (stock, waste) = Self::stock_and_waste(board)?;
        let stock_is_empty = board.deck(stock)?.is_empty();
        let waste_is_empty = board.deck(waste)?.is_empty();

        let outcome = if can_deal_from_stock(stock_is_empty) {
            StockOutcome::Drawn(draw_to_waste(board, stock, waste, self.draw.cards_per_draw())?)
        } else if can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
            StockOutcome::Recycled(recycle_waste(board, stock, waste)?)
        } else {
            debug!("[Stock] stock and waste are both empty");
            return Err(GameError::StockUnavailable);
        };
        self.update_draggable(board, stock)?;
        self.update_draggable(board, waste)?;
        Ok(outcome)
    }

    fn allows_auto_complete_move(&self, board: &Board, card: Entity, target: DeckId) -> bool {
        match MoveContext::new(board, target, card) {
            Some(ctx) => !shuffles_without_progress(&ctx, board, false),
            None => false,
        }
    }

    fn move_score(&self, scoring: &ScoringConfig, target: StackType) -> i32 {
        if target.is_foundation() {
            scoring.move_to_foundation
        } else {
            0
        }
    }
}
