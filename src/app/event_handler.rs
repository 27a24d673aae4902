// src/app/event_handler.rs
//! Bookkeeping after the board changed: counters, score, hints, win check,
//! and the clock.

use log::{debug, info};

use crate::components::game_state::GameStatus;
use crate::ecs::system::System;
use crate::logic::auto_move::is_auto_complete_available;
use crate::logic::hints::compute_available_moves;
use crate::protocol::{GameEvent, SoundIntent};
use crate::systems::move_card_system::MoveReport;

use super::game_app::GameApp;

impl GameApp {
    /// Counts the step, scores the move and reports every card that moved.
    pub(crate) fn after_move(&mut self, report: &MoveReport) {
        self.stats.steps += 1;
        for &card in &report.moved {
            self.emit(GameEvent::CardMoved { card, from: report.from, to: report.to });
        }
        for &foundation in &report.completed {
            let collapsed = self.board.deck(foundation).map(|deck| deck.cards().to_vec()).unwrap_or_default();
            for card in collapsed {
                self.emit(GameEvent::CardMoved { card, from: report.to, to: foundation });
            }
        }
        self.apply_score(report.score_delta);
        self.emit(GameEvent::Sound(SoundIntent::Move));
        self.finish_turn();
    }

    /// Adds to the score (never below zero) and reports the applied change.
    pub(crate) fn apply_score(&mut self, delta: i32) {
        let applied = self.stats.add_score(delta);
        if applied != 0 {
            self.emit(GameEvent::ScoreChanged { delta: applied, score: self.stats.score });
        }
    }

    /// Recomputes hints and auto-complete availability, then checks for a win.
    pub(crate) fn finish_turn(&mut self) {
        self.hints = compute_available_moves(&self.board, self.rules.as_ref(), false);
        self.hint_cursor.reset();
        self.emit(GameEvent::HintsUpdated(self.hints.hints.clone()));

        let available = is_auto_complete_available(&self.board, self.config.auto_complete, &self.hints);
        if available != self.auto_complete_available {
            self.auto_complete_available = available;
            self.emit(GameEvent::AutoCompleteAvailable(available));
        }

        self.win_system.run(&mut self.board, self.rules.as_ref());
        match (self.win_system.is_won(), self.status) {
            (true, GameStatus::Won) => {}
            (true, _) => self.declare_win(),
            (false, GameStatus::Won) => self.status = GameStatus::Playing,
            (false, _) => {}
        }
    }

    fn declare_win(&mut self) {
        self.status = GameStatus::Won;
        self.auto_complete.finish();
        let score = self.config.scoring.win_score(self.stats.score, self.stats.time);
        info!(
            "[Session] won with score {} in {} step(s), {} s",
            score, self.stats.steps, self.stats.time
        );
        self.emit(GameEvent::GameWon { score, steps: self.stats.steps, time: self.stats.time });
        self.emit(GameEvent::Sound(SoundIntent::Win));
    }

    /// Advances the game clock. The clock starts with the first step and stops
    /// on a win; each full penalty interval costs points.
    pub fn tick(&mut self, seconds: u32) {
        if self.status == GameStatus::Won || !self.stats.timer_running() {
            return;
        }
        self.stats.time = self.stats.time.saturating_add(seconds);
        self.penalty_clock = self.penalty_clock.saturating_add(seconds);
        let interval = self.config.scoring.time_penalty_interval.max(1);
        while self.penalty_clock >= interval {
            self.penalty_clock -= interval;
            debug!("[Session] time penalty at {} s", self.stats.time);
            self.apply_score(-self.config.scoring.time_penalty);
        }
    }
}
