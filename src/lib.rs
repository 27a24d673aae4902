// src/lib.rs
//! Rules engine for Klondike, Spider and Freecell solitaire.
//!
//! The crate holds no rendering, audio or storage code. A host drives a
//! [`GameApp`] with input calls, drains [`GameEvent`]s to animate, and hands
//! in a [`KeyValueStore`] for save/load.

pub mod app;
pub mod components;
pub mod config;
pub mod ecs;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod world;

pub use app::{GameApp, KeyValueStore, MemoryStore};
pub use components::{Card, CardColor, DeckId, GameStats, GameStatus, Position, Rank, StackType, Suit};
pub use config::{GameConfig, Variant, VariantConfig};
pub use ecs::Entity;
pub use error::{GameError, GameResult, UndoBlock};
pub use logic::rules::{StockOutcome, VariantRules};
pub use protocol::{GameEvent, HintElement, SaveRecord, SoundIntent};
pub use world::Board;
