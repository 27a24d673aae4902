// src/config/scoring.rs
//! Score values. All of them can be overridden through `GameConfig`.

use serde::{Deserialize, Serialize};

pub const SCORE_MOVE_TO_FOUNDATION: i32 = 10;
pub const SCORE_SPIDER_MOVE: i32 = 10;
pub const SCORE_RUN_COMPLETED: i32 = 10;
pub const SCORE_TIME_PENALTY: i32 = 30;
pub const TIME_PENALTY_INTERVAL_SECS: u32 = 30;
pub const SCORE_WIN_NUMERATOR: u32 = 600_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub move_to_foundation: i32,
    pub spider_move: i32,
    pub run_completed: i32,
    pub time_penalty: i32,
    pub time_penalty_interval: u32,
    pub win_numerator: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            move_to_foundation: SCORE_MOVE_TO_FOUNDATION,
            spider_move: SCORE_SPIDER_MOVE,
            run_completed: SCORE_RUN_COMPLETED,
            time_penalty: SCORE_TIME_PENALTY,
            time_penalty_interval: TIME_PENALTY_INTERVAL_SECS,
            win_numerator: SCORE_WIN_NUMERATOR,
        }
    }
}

impl ScoringConfig {
    /// Final score on a win. A zero-second game counts as one second.
    pub fn win_score(&self, score: u32, time: u32) -> u32 {
        score.saturating_add(self.win_numerator / time.max(1))
    }
}
