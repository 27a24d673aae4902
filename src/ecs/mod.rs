// src/ecs/mod.rs
//! Card handles and the post-move system trait.

pub mod entity;
pub mod system;

pub use entity::Entity;
pub use system::System;
