// src/app/undo_handler.rs

use log::info;

use crate::error::{GameError, GameResult, UndoBlock};
use crate::protocol::{GameEvent, SoundIntent};
use crate::systems::undo_system::UndoOutcome;

use super::game_app::GameApp;

impl GameApp {
    /// Takes back the last move. The step counter goes back with it; the
    /// score does not.
    ///
    /// Temporary entries (the pause mark) are not moves: the manager skips
    /// them and restores the newest real snapshot, so `Restored` always
    /// means a move was taken back.
    pub fn undo(&mut self) -> GameResult<()> {
        self.ensure_idle()?;
        match self.undo.undo(&mut self.board, self.rules.as_ref(), false) {
            Ok(UndoOutcome::Restored) => {
                self.stats.steps = self.stats.steps.saturating_sub(1);
                self.tap_history = None;
                self.dragging = None;
                self.emit(GameEvent::BoardRestored);
                self.finish_turn();
                Ok(())
            }
            Ok(UndoOutcome::Discarded) => Ok(()),
            Err(GameError::UndoUnavailable(UndoBlock::NeedsCredits)) => {
                self.emit(GameEvent::UndoCreditsRequested);
                Err(GameError::UndoUnavailable(UndoBlock::NeedsCredits))
            }
            Err(err) => {
                self.emit(GameEvent::Sound(SoundIntent::Error));
                Err(err)
            }
        }
    }

    /// Adds undo credits, e.g. after the player watched an ad.
    pub fn grant_undo_credits(&mut self, credits: u32) {
        self.undo.grant_credits(credits);
    }

    /// Marks the board when the app goes to the background.
    pub fn pause(&mut self) {
        info!("[Session] paused");
        self.undo.snapshot(&self.board, true);
    }

    /// Drops the pause marker again, along with any other temporary entry,
    /// even when moves were made on top of it.
    pub fn resume(&mut self) -> GameResult<()> {
        info!("[Session] resumed");
        self.undo.drop_temporary();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::GameConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn undo_while_paused_takes_back_the_move() {
        let mut app = GameApp::with_seed(GameConfig::default(), 31).unwrap();
        let dealt = app.board().clone();
        app.tap_stock().unwrap();
        app.pause();
        app.drain_events();

        app.undo().unwrap();
        assert_eq!(app.board(), &dealt);
        assert_eq!(app.stats().steps, 0);
        assert!(app.undo_manager().is_empty(), "the pause mark went with the move");
        assert!(app.drain_events().contains(&GameEvent::BoardRestored));
        println!("undo while paused: ok");
    }

    #[test]
    fn resume_drops_a_buried_pause_mark() {
        let mut app = GameApp::with_seed(GameConfig::default(), 32).unwrap();
        app.pause();
        app.tap_stock().unwrap();
        app.resume().unwrap();
        assert_eq!(app.undo_manager().len(), 1);
        assert!(!app.undo_manager().top_is_temporary());
        assert!(app.undo_manager().states().iter().all(|state| !state.is_temporary));
    }

    #[test]
    fn nothing_to_undo_while_only_paused() {
        let mut app = GameApp::with_seed(GameConfig::default(), 33).unwrap();
        let dealt = app.board().clone();
        app.pause();
        assert!(matches!(app.undo(), Err(GameError::UndoUnavailable(UndoBlock::EmptyStack))));
        assert_eq!(app.board(), &dealt);
        assert_eq!(app.stats().steps, 0);
        app.resume().unwrap();
        assert!(app.undo_manager().is_empty());
    }
}
