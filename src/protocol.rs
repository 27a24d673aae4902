// src/protocol.rs
//! Data that crosses the core's boundary: the persisted game record and the
//! events handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::components::card::{Rank, Suit};
use crate::components::position::Position;
use crate::components::stack::DeckId;
use crate::config::rules::{Variant, VariantConfig};
use crate::ecs::entity::Entity;

// --- Persistence ---

/// Everything stored for a variant's last game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    pub is_countable: bool,
    pub available_undo_counts: u32,
    pub score: u32,
    pub steps: u32,
    pub time: u32,
    /// Card order of the deal, for replay.
    pub cards_nums: Vec<usize>,
    pub variant_config: VariantConfig,
    /// Undo stack, oldest first. The last entry is the board at save time.
    pub states: Vec<UndoSnapshot>,
}

/// One entry of the undo stack.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UndoSnapshot {
    pub is_temporary: bool,
    pub decks: Vec<DeckRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeckRecord {
    pub deck_id: DeckId,
    /// Bottom first.
    pub cards: Vec<CardRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub number: usize,
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
    pub draggable: bool,
    pub stack_index: usize,
    pub deck_id: DeckId,
    pub position: Position,
}

// --- Hints ---

/// A legal move found on the current board.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HintElement {
    pub card: Entity,
    pub source_deck: DeckId,
    pub source_position: Position,
    pub target_position: Position,
    pub destination: DeckId,
}

// --- Events ---

/// What a sound player should play. The core never plays audio itself.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundIntent {
    Move,
    Deal,
    Error,
    Win,
}

/// Notifications for the presentation layer, drained from the session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameEvent {
    GameStarted { variant: Variant, replay: bool },
    CardMoved { card: Entity, from: DeckId, to: DeckId },
    MoveRejected { card: Entity },
    ScoreChanged { delta: i32, score: u32 },
    GameWon { score: u32, steps: u32, time: u32 },
    HintsUpdated(Vec<HintElement>),
    HintUnavailable { card: Option<Entity> },
    BoardRestored,
    UndoCreditsRequested,
    AutoCompleteAvailable(bool),
    Sound(SoundIntent),
}
