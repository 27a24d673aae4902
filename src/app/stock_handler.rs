// src/app/stock_handler.rs

use log::{debug, warn};

use crate::error::{GameError, GameResult};
use crate::logic::rules::StockOutcome;
use crate::protocol::{GameEvent, SoundIntent};

use super::game_app::GameApp;

impl GameApp {
    /// Tap on the stock: draw (Klondike), recycle the waste, or deal a row
    /// (Spider). Counts as a step and is undoable like any move.
    pub fn tap_stock(&mut self) -> GameResult<StockOutcome> {
        self.ensure_idle()?;
        self.undo.snapshot(&self.board, false);
        let outcome = match self.rules.on_stock_click(&mut self.board) {
            Ok(StockOutcome::NoStock) => {
                self.undo.undo(&mut self.board, self.rules.as_ref(), true)?;
                return Err(GameError::StockUnavailable);
            }
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("[Stock] {}", err);
                self.undo.undo(&mut self.board, self.rules.as_ref(), true)?;
                self.emit(GameEvent::Sound(SoundIntent::Error));
                return Err(err);
            }
        };
        self.tap_history = None;
        self.stats.steps += 1;

        let stock = self.board.stock_id();
        let waste = self.board.waste_id();
        match &outcome {
            StockOutcome::Drawn(cards) => {
                if let (Some(from), Some(to)) = (stock, waste) {
                    for &card in cards {
                        self.emit(GameEvent::CardMoved { card, from, to });
                    }
                }
            }
            StockOutcome::Recycled(count) => {
                debug!("[Stock] {} card(s) back to the stock", count);
                if let (Some(from), Some(to)) = (waste, stock) {
                    let returned = self.board.deck(to).map(|deck| deck.cards().to_vec()).unwrap_or_default();
                    for card in returned {
                        self.emit(GameEvent::CardMoved { card, from, to });
                    }
                }
            }
            StockOutcome::Dealt { cards, completed } => {
                if let Some(from) = stock {
                    for &(card, to) in cards {
                        self.emit(GameEvent::CardMoved { card, from, to });
                    }
                }
                for &(tableau, foundation) in completed {
                    let collapsed = self.board.deck(foundation).map(|deck| deck.cards().to_vec()).unwrap_or_default();
                    for card in collapsed {
                        self.emit(GameEvent::CardMoved { card, from: tableau, to: foundation });
                    }
                }
                let bonus = self.config.scoring.run_completed * completed.len() as i32;
                self.apply_score(bonus);
            }
            StockOutcome::NoStock => {}
        }
        self.emit(GameEvent::Sound(SoundIntent::Deal));
        self.finish_turn();
        Ok(outcome)
    }
}
