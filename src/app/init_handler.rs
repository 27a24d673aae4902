// src/app/init_handler.rs
//! New games: shuffling, replay and applying queued configuration.

use log::info;

use crate::components::game_state::{GameStats, GameStatus};
use crate::config::rules::GameConfig;
use crate::error::GameResult;
use crate::logic::deck::{apply_difficulty, create_card_order, new_seed, shuffle_order};
use crate::logic::rules::{rules_for, VariantRules};
use crate::protocol::{GameEvent, SoundIntent};
use crate::systems::deal_system::DealSystem;
use crate::world::Board;

use super::game_app::GameApp;

pub(crate) struct PreparedDeal {
    pub rules: Box<dyn VariantRules>,
    pub board: Board,
    pub order: Vec<usize>,
}

/// Deals a board for `config`, from `order` when replaying or from a shuffle
/// seeded with `seed` otherwise.
pub(crate) fn prepare_deal(config: &GameConfig, order: Option<Vec<usize>>, seed: u64) -> GameResult<PreparedDeal> {
    let rules = rules_for(&config.variant);
    let order = match order {
        Some(order) => order,
        None => {
            let mut order = create_card_order(rules.card_universe_size());
            shuffle_order(&mut order, seed);
            apply_difficulty(&mut order, &config.variant, rules.suit_count());
            order
        }
    };
    let board = DealSystem::deal(rules.as_ref(), &order)?;
    Ok(PreparedDeal { rules, board, order })
}

impl GameApp {
    /// Starts the next game.
    ///
    /// `replay` deals the current card order again under the current
    /// configuration. Otherwise any queued configuration is applied and a new
    /// shuffle is dealt.
    pub fn new_game(&mut self, replay: bool) -> GameResult<()> {
        if !replay {
            return self.new_game_with_seed(new_seed());
        }
        let prepared = prepare_deal(&self.config, Some(self.card_order.clone()), self.seed)?;
        self.install(prepared, self.seed);
        self.announce_new_game(true);
        Ok(())
    }

    /// Starts a new, non-replay game from a known seed.
    pub fn new_game_with_seed(&mut self, seed: u64) -> GameResult<()> {
        let config = self.pending_config.clone().unwrap_or_else(|| self.config.clone());
        let prepared = prepare_deal(&config, None, seed)?;
        self.pending_config = None;
        self.config = config;
        self.install(prepared, seed);
        self.announce_new_game(false);
        Ok(())
    }

    pub(crate) fn install(&mut self, prepared: PreparedDeal, seed: u64) {
        let PreparedDeal { rules, board, order } = prepared;
        self.rules = rules;
        self.board = board;
        self.card_order = order;
        self.seed = seed;
        self.undo.reset(self.config.undo.countable, self.config.undo.credits);
        self.stats = GameStats::default();
        self.status = GameStatus::Playing;
        self.auto_complete.reset();
        self.auto_complete_available = false;
        self.tap_history = None;
        self.dragging = None;
        self.win_system.reset();
        self.penalty_clock = 0;
    }

    pub(crate) fn announce_new_game(&mut self, replay: bool) {
        info!("[Session] {} game of {:?} started", if replay { "replayed" } else { "new" }, self.rules.variant());
        self.emit(GameEvent::GameStarted { variant: self.rules.variant(), replay });
        self.emit(GameEvent::Sound(SoundIntent::Deal));
        self.finish_turn();
    }
}
