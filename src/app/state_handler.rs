// src/app/state_handler.rs
//! Saving and loading the last game through a key-value store owned by the host.

use std::collections::HashMap;

use log::{info, warn};

use crate::components::game_state::GameStats;
use crate::config::rules::{GameConfig, Variant};
use crate::error::GameResult;
use crate::protocol::{GameEvent, SaveRecord};
use crate::systems::undo_system::{capture, UndoManager};

use super::game_app::GameApp;
use super::init_handler::prepare_deal;

/// Storage port. The host decides where the blobs live.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store, for tests and hosts without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Reads the saved record of `variant`. Anything unreadable counts as no save.
pub fn read_saved_game(store: &dyn KeyValueStore, variant: Variant) -> Option<SaveRecord> {
    let blob = store.get(variant.save_key())?;
    match serde_json::from_str::<SaveRecord>(&blob) {
        Ok(record) if record.variant_config.variant() == variant => Some(record),
        Ok(_) => {
            warn!("[Persistence] {} holds another variant", variant.save_key());
            None
        }
        Err(err) => {
            warn!("[Persistence] malformed {}: {}", variant.save_key(), err);
            None
        }
    }
}

impl GameApp {
    /// Writes the running game under its variant's key. The current board
    /// goes on top of the undo stack as a temporary entry.
    pub fn save_game(&self, store: &mut dyn KeyValueStore) -> GameResult<()> {
        let mut states = self.undo.states().to_vec();
        states.push(capture(&self.board, true));
        let record = SaveRecord {
            is_countable: self.undo.is_countable(),
            available_undo_counts: self.undo.available_credits(),
            score: self.stats.score,
            steps: self.stats.steps,
            time: self.stats.time,
            cards_nums: self.card_order.clone(),
            variant_config: self.config.variant,
            states,
        };
        let blob = serde_json::to_string(&record)?;
        store.set(self.rules.variant().save_key(), blob);
        info!("[Persistence] saved {} ({} state(s))", self.rules.variant().save_key(), record.states.len());
        Ok(())
    }

    /// Resumes the saved game of the configured variant.
    ///
    /// Returns false and leaves the session alone when there is no usable
    /// save. On success the queued configuration is consumed and temporary
    /// undo entries are dropped.
    pub fn load_game(&mut self, store: &dyn KeyValueStore) -> bool {
        let base = self.pending_config.clone().unwrap_or_else(|| self.config.clone());
        let Some(record) = read_saved_game(store, base.variant.variant()) else {
            return false;
        };
        let config = GameConfig { variant: record.variant_config, ..base };

        let mut prepared = match prepare_deal(&config, Some(record.cards_nums.clone()), self.seed) {
            Ok(prepared) => prepared,
            Err(err) => {
                warn!("[Persistence] saved card order rejected: {}", err);
                return false;
            }
        };
        let mut undo = UndoManager::from_saved(record.states, record.is_countable, record.available_undo_counts);
        if let Err(err) = undo.restore_latest(&mut prepared.board, prepared.rules.as_ref()) {
            warn!("[Persistence] saved board rejected: {}", err);
            return false;
        }
        undo.drop_temporary();

        self.pending_config = None;
        self.config = config;
        let seed = self.seed;
        self.install(prepared, seed);
        self.undo = undo;
        self.stats = GameStats { score: record.score, steps: record.steps, time: record.time };
        info!("[Persistence] loaded {:?} at step {}", self.rules.variant(), self.stats.steps);
        self.emit(GameEvent::BoardRestored);
        self.finish_turn();
        true
    }

    pub fn has_saved_game(&self, store: &dyn KeyValueStore) -> bool {
        read_saved_game(store, self.rules.variant()).is_some()
    }

    pub fn clear_saved_game(&self, store: &mut dyn KeyValueStore) {
        store.remove(self.rules.variant().save_key());
    }
}
