// src/systems/deal_system.rs

use log::info;

use crate::error::{GameError, GameResult};
use crate::logic::rules::{refresh_all_draggable, VariantRules};
use crate::world::Board;

/// Builds a freshly dealt board from a card order.
pub struct DealSystem;

impl DealSystem {
    /// Creates an empty board for the rules' layout, deals `order` onto it and
    /// computes draggability. `order` must be a permutation of the universe.
    pub fn deal(rules: &dyn VariantRules, order: &[usize]) -> GameResult<Board> {
        let universe = rules.card_universe_size();
        if order.len() != universe {
            return Err(GameError::CorruptSnapshot(format!(
                "deal order has {} cards, expected {}",
                order.len(),
                universe
            )));
        }
        let mut board = Board::new(*rules.config(), &rules.deck_layout(), universe, rules.suit_count());
        rules.deal_initial_layout(&mut board, order)?;
        refresh_all_draggable(&mut board, rules)?;
        board.check_invariants()?;
        info!("[Deal] dealt {} cards for {:?}", universe, rules.variant());
        Ok(board)
    }
}
