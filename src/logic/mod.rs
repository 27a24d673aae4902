// src/logic/mod.rs

pub mod auto_move;
pub mod deck;
pub mod hints;
pub mod rules;
