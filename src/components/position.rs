// src/components/position.rs

use serde::{Deserialize, Serialize};

/// Layout position of a card or a deck anchor.
///
/// The core never computes geometry; the presentation layer writes these and
/// snapshots carry them so that a restore puts every card back where it was.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_both_axes() {
        let pos = Position::new(100.5, -50.0);
        assert_eq!(pos.offset(-0.5, 10.0), Position::new(100.0, -40.0));
        assert_eq!(Position::default(), Position::new(0.0, 0.0));
    }
}
