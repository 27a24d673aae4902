// src/systems/win_condition_system.rs

use log::info;

use crate::ecs::system::System;
use crate::logic::rules::VariantRules;
use crate::world::Board;

/// Watches for the moment every foundation is full.
#[derive(Debug, Default)]
pub struct WinConditionSystem {
    won: bool,
}

impl WinConditionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn reset(&mut self) {
        self.won = false;
    }
}

impl System for WinConditionSystem {
    fn run(&mut self, board: &mut Board, _rules: &dyn VariantRules) {
        let won = board.has_won();
        if won && !self.won {
            info!("[Win] all foundations complete");
        }
        self.won = won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stack::StackType;
    use crate::config::rules::VariantConfig;
    use crate::ecs::entity::Entity;
    use crate::logic::rules::rules_for;

    /// A Klondike layout with `per_foundation[i]` cards on foundation i and
    /// the rest on the first tableau.
    fn board_with_foundations(per_foundation: [usize; 4]) -> Board {
        let rules = rules_for(&VariantConfig::default());
        let mut board = Board::new(*rules.config(), &rules.deck_layout(), 52, 4);
        let tableau = board.find_deck(StackType::Tableau(0)).unwrap();
        for suit in 0..4 {
            let foundation = board.find_deck(StackType::Foundation(suit as u8)).unwrap();
            for rank in 0..13 {
                let target = if rank < per_foundation[suit] { foundation } else { tableau };
                board.place(Entity(suit * 13 + rank), target).unwrap();
            }
        }
        board
    }

    #[test]
    fn win_requires_every_foundation_full() {
        let rules = rules_for(&VariantConfig::default());
        let mut system = WinConditionSystem::new();

        let mut almost = board_with_foundations([12, 13, 13, 13]);
        system.run(&mut almost, rules.as_ref());
        assert!(!system.is_won(), "12/13/13/13 is not a win");

        let mut full = board_with_foundations([13, 13, 13, 13]);
        system.run(&mut full, rules.as_ref());
        assert!(system.is_won());

        system.reset();
        assert!(!system.is_won());
    }
}
