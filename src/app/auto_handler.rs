// src/app/auto_handler.rs

use log::warn;

use crate::components::game_state::GameStatus;
use crate::error::GameResult;
use crate::logic::auto_move::AutoCompleteStep;
use crate::logic::hints::compute_available_moves;
use crate::systems::move_card_system::MoveCardSystem;

use super::game_app::GameApp;

impl GameApp {
    pub fn is_auto_complete_available(&self) -> bool {
        self.auto_complete_available
    }

    /// Starts auto-complete. False when it is not on offer or already running.
    pub fn begin_auto_complete(&mut self) -> bool {
        if self.status == GameStatus::Won || !self.auto_complete_available {
            return false;
        }
        if !self.auto_complete.begin() {
            return false;
        }
        self.tap_history = None;
        self.dragging = None;
        self.status = GameStatus::AutoCompleting;
        true
    }

    /// Plays one auto-complete move. `done` is set once there is nothing
    /// left to play or the game was won.
    pub fn auto_complete_step(&mut self) -> GameResult<AutoCompleteStep> {
        if !self.auto_complete.is_running() {
            return Ok(AutoCompleteStep { applied: None, done: true });
        }
        let hints = compute_available_moves(&self.board, self.rules.as_ref(), true);
        let Some(hint) = self.auto_complete.next_move(&hints) else {
            self.leave_auto_complete();
            return Ok(AutoCompleteStep { applied: None, done: true });
        };

        let report = match MoveCardSystem::apply_hint(
            &mut self.board,
            self.rules.as_ref(),
            &self.config.scoring,
            &mut self.undo,
            &hint,
        ) {
            Ok(report) => report,
            Err(err) => {
                warn!("[AutoComplete] stopped: {}", err);
                self.auto_complete.cancel();
                self.leave_auto_complete();
                return Err(err);
            }
        };
        self.after_move(&report);

        let done = !self.auto_complete.is_running();
        if done {
            self.leave_auto_complete();
        }
        Ok(AutoCompleteStep { applied: Some(hint), done })
    }

    /// Stops between steps. The board keeps every move played so far.
    pub fn cancel_auto_complete(&mut self) {
        self.auto_complete.cancel();
        self.leave_auto_complete();
    }

    fn leave_auto_complete(&mut self) {
        if self.status == GameStatus::AutoCompleting {
            self.status = GameStatus::Playing;
        }
    }
}
