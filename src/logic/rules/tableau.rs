//! Tableau (Bottom deck) acceptance.

use crate::components::card::{Card, Rank};

/// What an empty tableau accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyTableau {
    KingOnly,
    AnyCard,
}

/// Alternating-color build down, used by Klondike and Freecell.
pub fn can_move_to_tableau(card: &Card, tableau_top: Option<&Card>, empty: EmptyTableau) -> bool {
    match tableau_top {
        None => match empty {
            EmptyTableau::KingOnly => card.rank == Rank::King,
            EmptyTableau::AnyCard => true,
        },
        Some(top) => top.is_face_up && top.color() != card.color() && card.rank.is_one_below(top.rank),
    }
}

/// Build down regardless of suit, used by Spider.
pub fn can_build_down_any_suit(card: &Card, tableau_top: Option<&Card>) -> bool {
    match tableau_top {
        None => true,
        Some(top) => top.is_face_up && card.rank.is_one_below(top.rank),
    }
}
