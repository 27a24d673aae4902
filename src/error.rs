// src/error.rs
//! Error taxonomy of the game core. Every variant is recoverable.

use thiserror::Error;

use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;

/// Why an undo could not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoBlock {
    EmptyStack,
    NeedsCredits,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no deck accepts {card}")]
    InvalidMove { card: Entity },

    #[error("{card} cannot be picked up")]
    CardNotDraggable { card: Entity },

    #[error("no hint moves {card}")]
    HintTargetNotFound { card: Entity },

    #[error("undo unavailable: {0:?}")]
    UndoUnavailable(UndoBlock),

    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("the stock cannot be used right now")]
    StockUnavailable,

    #[error("auto-complete is running")]
    AutoCompleteActive,

    #[error("unknown card {0}")]
    UnknownCard(Entity),

    #[error("unknown deck {0}")]
    UnknownDeck(DeckId),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GameResult<T> = Result<T, GameError>;
