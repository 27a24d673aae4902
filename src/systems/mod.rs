// src/systems/mod.rs

pub mod deal_system;
pub mod move_card_system;
pub mod undo_system;
pub mod win_condition_system;

pub use deal_system::DealSystem;
pub use move_card_system::{MoveCardSystem, MoveReport};
pub use undo_system::{UndoManager, UndoOutcome};
pub use win_condition_system::WinConditionSystem;
