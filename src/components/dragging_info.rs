// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::position::Position;
use crate::components::stack::DeckId;
use crate::ecs::entity::Entity;

/// The run currently held by the player, with where each card started.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    pub card: Entity,
    pub original_deck: DeckId,
    pub original_positions: Vec<(Entity, Position)>,
}
