// src/components/game_state.rs

use serde::{Deserialize, Serialize};

/// Lifecycle of the current deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    AutoCompleting,
    Won,
}

/// Score, step count and elapsed seconds of the current deal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub score: u32,
    pub steps: u32,
    pub time: u32,
}

impl GameStats {
    /// Applies `delta` with the score floored at zero. Returns the change
    /// actually applied.
    pub fn add_score(&mut self, delta: i32) -> i32 {
        let before = i64::from(self.score);
        let after = (before + i64::from(delta)).clamp(0, i64::from(u32::MAX));
        self.score = after as u32;
        (after - before) as i32
    }

    /// The timer only runs once the player has made a step.
    pub fn timer_running(&self) -> bool {
        self.steps > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_never_goes_negative() {
        let mut stats = GameStats::default();
        assert_eq!(stats.add_score(10), 10);
        assert_eq!(stats.add_score(-30), -10);
        assert_eq!(stats.score, 0);
        assert_eq!(stats.add_score(-5), 0);
    }

    #[test]
    fn timer_waits_for_first_step() {
        let mut stats = GameStats::default();
        assert!(!stats.timer_running());
        stats.steps = 1;
        assert!(stats.timer_running());
        assert_ne!(GameStatus::Playing, GameStatus::Won);
    }
}
