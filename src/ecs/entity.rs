// src/ecs/entity.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of one card on the board.
///
/// The wrapped value is the card number, so `Entity(n)` always names the same
/// suit and rank for a given card universe. Boards store their cards in an arena
/// indexed by this number.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

impl Entity {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "card#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_orders_by_card_number() {
        let low = Entity(3);
        let high = Entity(40);
        assert!(low < high, "entities should order by their card number");
        assert_eq!(high.index(), 40);
        assert_eq!(format!("{}", low), "card#3");
    }
}
