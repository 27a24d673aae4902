// src/app/mod.rs
//! The session facade. `GameApp` lives in `game_app`; each handler module adds
//! one group of entry points to it.

pub mod auto_handler;
pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod init_handler;
pub mod state_handler;
pub mod stock_handler;
pub mod undo_handler;

pub use game_app::GameApp;
pub use state_handler::{read_saved_game, KeyValueStore, MemoryStore};
