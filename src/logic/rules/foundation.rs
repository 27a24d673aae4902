//! Foundation (Ace deck) acceptance.

use crate::components::card::{Card, Rank};

/// A foundation takes an Ace when empty, then the next rank of its suit.
pub fn can_move_to_foundation(card: &Card, foundation_top: Option<&Card>) -> bool {
    match foundation_top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.is_one_below(card.rank),
    }
}
