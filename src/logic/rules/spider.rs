//! Spider: ten tableaus, two decks, runs of a suit collapse to the foundations.

use log::info;

use crate::components::stack::{DeckId, StackType};
use crate::config::layout::{
    RANKS_PER_SUIT, SPIDER_DECK_SIZE, SPIDER_FOUNDATION_COUNT, SPIDER_LONG_COLUMNS, SPIDER_SHORT_COLUMN_DEPTH,
    SPIDER_TABLEAU_COUNT,
};
use crate::config::rules::{SpiderSuits, VariantConfig};
use crate::config::scoring::ScoringConfig;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::world::Board;

use super::common::{mark_run_from_top, mark_top, same_suit, shuffles_without_progress, top_run_len, MoveContext};
use super::tableau::can_build_down_any_suit;
use super::{StockOutcome, VariantRules};

pub struct SpiderRules {
    config: VariantConfig,
    suits: SpiderSuits,
}

impl SpiderRules {
    pub fn new(config: VariantConfig) -> Self {
        let suits = match config {
            VariantConfig::Spider { suits } => suits,
            _ => SpiderSuits::default(),
        };
        SpiderRules { config, suits }
    }
}

impl VariantRules for SpiderRules {
    fn config(&self) -> &VariantConfig {
        &self.config
    }

    fn card_universe_size(&self) -> usize {
        SPIDER_DECK_SIZE
    }

    fn suit_count(&self) -> usize {
        self.suits.suit_count()
    }

    fn deck_layout(&self) -> Vec<StackType> {
        let foundations = (0..SPIDER_FOUNDATION_COUNT as u8).map(StackType::Foundation);
        let tableaus = (0..SPIDER_TABLEAU_COUNT as u8).map(StackType::Tableau);
        foundations.chain(tableaus).chain([StackType::Stock]).collect()
    }

    // 6 cards to each of the first four columns, 5 to the rest; 50 stay in the stock.
    fn deal_initial_layout(&self, board: &mut Board, order: &[usize]) -> GameResult<()> {
        let stock = board.stock_id().ok_or(GameError::StockUnavailable)?;
        for &number in order {
            board.place(Entity(number), stock)?;
        }
        let tableaus: Vec<DeckId> = board.tableaus().map(|deck| deck.id).collect();
        for (column, &tableau) in tableaus.iter().enumerate() {
            let depth = SPIDER_SHORT_COLUMN_DEPTH + usize::from(column < SPIDER_LONG_COLUMNS);
            for _ in 0..depth {
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
        // Foundations only ever receive collapsed runs.
        ctx.target.stack_type.is_tableau() && can_build_down_any_suit(ctx.card, ctx.target_top)
    }

    fn update_draggable(&self, board: &mut Board, deck: DeckId) -> GameResult<()> {
        match board.deck(deck)?.stack_type {
            StackType::Tableau(_) => mark_run_from_top(board, deck, same_suit),
            _ => mark_top(board, deck, 0),
        }
    }

    fn on_stock_click(&self, board: &mut Board) -> GameResult<StockOutcome> {
        let stock = board.stock_id().ok_or(GameError::StockUnavailable)?;
        if board.deck(stock)?.is_empty() || board.tableaus().any(|deck| deck.is_empty()) {
            return Err(GameError::StockUnavailable);
        }
        let tableaus: Vec<DeckId> = board.tableaus().map(|deck| deck.id).collect();
        let mut cards = Vec::with_capacity(tableaus.len());
        let mut completed = Vec::new();
        for tableau in tableaus {
            let Some(card) = board.move_top(stock, tableau)? else {
                break;
            };
            board.card_mut(card)?.is_face_up = true;
            cards.push((card, tableau));
            self.update_draggable(board, tableau)?;
            if let Some(foundation) = self.try_auto_collapse_run(board, tableau)? {
                completed.push((tableau, foundation));
            }
        }
        self.update_draggable(board, stock)?;
        Ok(StockOutcome::Dealt { cards, completed })
    }

    fn try_auto_collapse_run(&self, board: &mut Board, deck: DeckId) -> GameResult<Option<DeckId>> {
        let source = board.deck(deck)?;
        if !source.stack_type.is_tableau() || source.count() < RANKS_PER_SUIT {
            return Ok(None);
        }
        let run_start = source.cards()[source.count() - RANKS_PER_SUIT];
        let cards = board.cards_in(deck)?;
        let top_run = &cards[cards.len() - RANKS_PER_SUIT..];
        let complete = top_run_len(top_run, same_suit) == RANKS_PER_SUIT;
        if !complete {
            return Ok(None);
        }
        let Some(foundation) = board.foundations().find(|deck| deck.is_empty()).map(|deck| deck.id) else {
            return Ok(None);
        };

        let moved = board.transfer(deck, run_start, foundation)?;
        for card in moved {
            board.card_mut(card)?.is_draggable = false;
        }
        board.flip_top_face_up(deck)?;
        self.update_draggable(board, deck)?;
        info!("[Spider] completed run moved from {} to {}", deck, foundation);
        Ok(Some(foundation))
    }

    fn allows_auto_complete_move(&self, board: &Board, card: Entity, target: DeckId) -> bool {
        match MoveContext::new(board, target, card) {
            Some(ctx) => !ctx.target.is_empty() && !shuffles_without_progress(&ctx, board, false),
            None => false,
        }
    }

    fn move_score(&self, scoring: &ScoringConfig, _target: StackType) -> i32 {
        scoring.spider_move
    }
}
