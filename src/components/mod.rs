// src/components/mod.rs

pub mod card;
pub mod dragging_info;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use game_state::{GameStats, GameStatus};
pub use position::Position;
pub use stack::{Deck, DeckId, StackInfo, StackType};
