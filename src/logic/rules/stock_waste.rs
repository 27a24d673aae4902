//! Stock and waste handling for Klondike.

use log::debug;

use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::world::Board;

pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}

/// Turns up to `amount` cards from the stock onto the waste.
pub(crate) fn draw_to_waste(board: &mut Board, stock: DeckId, waste: DeckId, amount: usize) -> GameResult<Vec<Entity>> {
    let mut drawn = Vec::with_capacity(amount);
    for _ in 0..amount {
        match board.move_top(stock, waste)? {
            Some(card) => {
                board.card_mut(card)?.is_face_up = true;
                drawn.push(card);
            }
            None => break,
        }
    }
    debug!("[Stock] drew {} card(s) to the waste", drawn.len());
    Ok(drawn)
}

/// Puts the whole waste back into the stock face down, so the first card drawn
/// is the first to come out again.
pub(crate) fn recycle_waste(board: &mut Board, stock: DeckId, waste: DeckId) -> GameResult<usize> {
    let mut count = 0;
    while let Some(card) = board.move_top(waste, stock)? {
        board.card_mut(card)?.is_face_up = false;
        count += 1;
    }
    debug!("[Stock] recycled {} card(s) from the waste", count);
    Ok(count)
}
