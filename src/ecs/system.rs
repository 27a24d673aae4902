// src/ecs/system.rs

use crate::logic::rules::VariantRules;
use crate::world::Board;

/// A step that runs over the whole board after it changed.
///
/// Systems receive the board and the active rules for one call only and keep
/// no reference to either afterwards.
pub trait System {
    fn run(&mut self, board: &mut Board, rules: &dyn VariantRules);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::VariantConfig;
    use crate::logic::rules::rules_for;
    use crate::systems::deal_system::DealSystem;

    struct CountingSystem {
        face_up_seen: usize,
    }

    impl System for CountingSystem {
        fn run(&mut self, board: &mut Board, _rules: &dyn VariantRules) {
            self.face_up_seen = board.cards().iter().filter(|card| card.is_face_up).count();
        }
    }

    #[test]
    fn system_runs_over_dealt_board() {
        let rules = rules_for(&VariantConfig::default());
        let order: Vec<usize> = (0..rules.card_universe_size()).collect();
        let mut board = DealSystem::deal(rules.as_ref(), &order).expect("deal should succeed");

        let mut system = CountingSystem { face_up_seen: 0 };
        system.run(&mut board, rules.as_ref());

        // One face-up card on each of the seven tableaus.
        assert_eq!(system.face_up_seen, 7);
    }
}
