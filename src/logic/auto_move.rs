// src/logic/auto_move.rs
//! Auto-complete as an explicit step machine.
//!
//! The presentation layer calls `begin`, then asks for one move at a time and
//! animates it before asking again. Each step is a whole move, so cancelling
//! between steps always leaves a consistent board.

use log::{debug, info};

use crate::config::rules::AutoCompleteMode;
use crate::logic::hints::HintSet;
use crate::protocol::HintElement;
use crate::world::Board;

/// Upper bound on moves in one auto-complete run.
pub const MAX_AUTO_COMPLETE_STEPS: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoCompleteState {
    #[default]
    Idle,
    Running,
    Finished,
    Cancelled,
}

/// Result of one auto-complete step.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoCompleteStep {
    pub applied: Option<HintElement>,
    pub done: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AutoComplete {
    state: AutoCompleteState,
    steps_taken: usize,
}

impl AutoComplete {
    pub fn state(&self) -> AutoCompleteState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == AutoCompleteState::Running
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Starts a run. Returns false when one is already running.
    pub fn begin(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        info!("[AutoComplete] started");
        self.state = AutoCompleteState::Running;
        self.steps_taken = 0;
        true
    }

    /// Picks the next move from freshly computed hints, or finishes the run.
    pub fn next_move(&mut self, hints: &HintSet) -> Option<HintElement> {
        if !self.is_running() {
            return None;
        }
        if self.steps_taken >= MAX_AUTO_COMPLETE_STEPS {
            self.finish();
            return None;
        }
        match hints.auto_complete_hints.first() {
            Some(hint) => {
                self.steps_taken += 1;
                debug!("[AutoComplete] step {} moves {}", self.steps_taken, hint.card);
                Some(hint.clone())
            }
            None => {
                self.finish();
                None
            }
        }
    }

    pub fn finish(&mut self) {
        if self.is_running() {
            info!("[AutoComplete] finished after {} step(s)", self.steps_taken);
            self.state = AutoCompleteState::Finished;
        }
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            info!("[AutoComplete] cancelled after {} step(s)", self.steps_taken);
            self.state = AutoCompleteState::Cancelled;
        }
    }

    pub fn reset(&mut self) {
        *self = AutoComplete::default();
    }
}

/// Whether auto-complete may be offered on this board.
///
/// `OnlyWhenAllDecksClear` waits until every tableau card is face up and
/// draggable, the stock is empty and at most one card is left on the waste.
pub fn is_auto_complete_available(board: &Board, mode: AutoCompleteMode, hints: &HintSet) -> bool {
    if hints.auto_complete_hints.is_empty() {
        return false;
    }
    match mode {
        AutoCompleteMode::FullGameSession => true,
        AutoCompleteMode::OnlyWhenAllDecksClear => {
            let tableaus_clear = board.tableaus().all(|deck| {
                deck.cards()
                    .iter()
                    .all(|&entity| board.card(entity).map_or(false, |card| card.is_face_up && card.is_draggable))
            });
            let stock_empty = board
                .stock_id()
                .and_then(|id| board.deck(id).ok())
                .map_or(true, |deck| deck.is_empty());
            let waste_small = board
                .waste_id()
                .and_then(|id| board.deck(id).ok())
                .map_or(true, |deck| deck.count() <= 1);
            tableaus_clear && stock_empty && waste_small
        }
    }
}
