// src/app/game_app.rs

use std::collections::VecDeque;

use log::info;

use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::{GameStats, GameStatus};
use crate::components::stack::DeckId;
use crate::config::rules::GameConfig;
use crate::ecs::entity::Entity;
use crate::error::{GameError, GameResult};
use crate::logic::auto_move::AutoComplete;
use crate::logic::deck::new_seed;
use crate::logic::hints::{HintCursor, HintSet};
use crate::logic::rules::VariantRules;
use crate::protocol::GameEvent;
use crate::systems::undo_system::UndoManager;
use crate::systems::win_condition_system::WinConditionSystem;
use crate::world::Board;

use super::init_handler::{prepare_deal, PreparedDeal};

/// Session controller: owns the board, the rules, the undo stack and the
/// counters, and turns input events into moves and output events.
///
/// Handlers in the sibling modules add the input and persistence entry points.
/// Events queue up until the presentation layer drains them.
pub struct GameApp {
    pub(crate) config: GameConfig,
    pub(crate) pending_config: Option<GameConfig>,
    pub(crate) rules: Box<dyn VariantRules>,
    pub(crate) board: Board,
    pub(crate) undo: UndoManager,
    pub(crate) stats: GameStats,
    pub(crate) status: GameStatus,
    pub(crate) card_order: Vec<usize>,
    pub(crate) seed: u64,
    pub(crate) hints: HintSet,
    pub(crate) hint_cursor: HintCursor,
    pub(crate) auto_complete: AutoComplete,
    pub(crate) auto_complete_available: bool,
    /// Card being tapped repeatedly and the decks it has sat in meanwhile.
    pub(crate) tap_history: Option<(Entity, Vec<DeckId>)>,
    pub(crate) dragging: Option<DraggingInfo>,
    pub(crate) win_system: WinConditionSystem,
    pub(crate) penalty_clock: u32,
    pub(crate) message_queue: VecDeque<GameEvent>,
}

impl GameApp {
    /// Starts a session with a freshly shuffled deal.
    pub fn new(config: GameConfig) -> GameResult<Self> {
        Self::with_seed(config, new_seed())
    }

    /// Starts a session whose first deal comes from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> GameResult<Self> {
        let prepared = prepare_deal(&config, None, seed)?;
        let mut app = Self::from_prepared(config, prepared, seed);
        app.announce_new_game(false);
        Ok(app)
    }

    pub(crate) fn from_prepared(config: GameConfig, prepared: PreparedDeal, seed: u64) -> Self {
        let PreparedDeal { rules, board, order } = prepared;
        info!("[Session] new session for {:?}", rules.variant());
        GameApp {
            undo: UndoManager::new(config.undo.countable, config.undo.credits),
            config,
            pending_config: None,
            rules,
            board,
            stats: GameStats::default(),
            status: GameStatus::Playing,
            card_order: order,
            seed,
            hints: HintSet::default(),
            hint_cursor: HintCursor::default(),
            auto_complete: AutoComplete::default(),
            auto_complete_available: false,
            tap_history: None,
            dragging: None,
            win_system: WinConditionSystem::new(),
            penalty_clock: 0,
            message_queue: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Config that the next new game will use.
    pub fn pending_config(&self) -> Option<&GameConfig> {
        self.pending_config.as_ref()
    }

    /// Stores a configuration change. It takes effect at the next new game.
    pub fn set_config(&mut self, config: GameConfig) {
        info!("[Session] config change queued for the next game");
        self.pending_config = Some(config);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &dyn VariantRules {
        self.rules.as_ref()
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_won(&self) -> bool {
        self.board.has_won()
    }

    pub fn hints(&self) -> &HintSet {
        &self.hints
    }

    pub fn undo_manager(&self) -> &UndoManager {
        &self.undo
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn card_order(&self) -> &[usize] {
        &self.card_order
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.message_queue.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.message_queue.push_back(event);
    }

    /// Player input is ignored while auto-complete drives the board.
    pub(crate) fn ensure_idle(&self) -> GameResult<()> {
        if self.auto_complete.is_running() {
            Err(GameError::AutoCompleteActive)
        } else {
            Ok(())
        }
    }
}
