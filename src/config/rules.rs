// src/config/rules.rs
//! Variant selection and per-variant options.

use serde::{Deserialize, Serialize};

use crate::config::layout::MAX_FREE_CELLS;
use crate::config::scoring::ScoringConfig;
use crate::error::GameResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Klondike,
    Spider,
    Freecell,
}

impl Variant {
    /// Key the last game of this variant is stored under.
    pub fn save_key(self) -> &'static str {
        match self {
            Variant::Klondike => "KlondikeLastGame",
            Variant::Spider => "SpiderLastGame",
            Variant::Freecell => "FreecellLastGame",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawRule {
    #[default]
    DrawOne,
    DrawThree,
}

impl DrawRule {
    pub fn cards_per_draw(self) -> usize {
        match self {
            DrawRule::DrawOne => 1,
            DrawRule::DrawThree => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpiderSuits {
    OneSuit,
    TwoSuits,
    #[default]
    FourSuits,
}

impl SpiderSuits {
    pub fn suit_count(self) -> usize {
        match self {
            SpiderSuits::OneSuit => 1,
            SpiderSuits::TwoSuits => 2,
            SpiderSuits::FourSuits => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FreeCellCount {
    One,
    Two,
    #[default]
    Four,
}

impl FreeCellCount {
    pub fn count(self) -> usize {
        match self {
            FreeCellCount::One => 1,
            FreeCellCount::Two => 2,
            FreeCellCount::Four => MAX_FREE_CELLS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
}

/// The variant to play and its table options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariantConfig {
    Klondike { draw: DrawRule, difficulty: Difficulty },
    Spider { suits: SpiderSuits },
    Freecell { free_cells: FreeCellCount, difficulty: Difficulty },
}

impl Default for VariantConfig {
    fn default() -> Self {
        VariantConfig::Klondike { draw: DrawRule::DrawOne, difficulty: Difficulty::Normal }
    }
}

impl VariantConfig {
    pub fn variant(&self) -> Variant {
        match self {
            VariantConfig::Klondike { .. } => Variant::Klondike,
            VariantConfig::Spider { .. } => Variant::Spider,
            VariantConfig::Freecell { .. } => Variant::Freecell,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        match self {
            VariantConfig::Klondike { difficulty, .. } | VariantConfig::Freecell { difficulty, .. } => {
                *difficulty
            }
            VariantConfig::Spider { .. } => Difficulty::Normal,
        }
    }

    /// Free cells actually laid out. Easy Freecell always gets all four.
    pub fn effective_free_cells(&self) -> usize {
        match self {
            VariantConfig::Freecell { difficulty: Difficulty::Easy, .. } => MAX_FREE_CELLS,
            VariantConfig::Freecell { free_cells, .. } => free_cells.count(),
            _ => 0,
        }
    }
}

/// When auto-complete may be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutoCompleteMode {
    #[default]
    FullGameSession,
    OnlyWhenAllDecksClear,
}

/// Bounded-undo settings. With `countable` off, undo depth is the only limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UndoPolicy {
    pub countable: bool,
    pub credits: u32,
}

/// Everything a new game is set up from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: VariantConfig,
    pub scoring: ScoringConfig,
    pub undo: UndoPolicy,
    pub auto_complete: AutoCompleteMode,
}

impl GameConfig {
    pub fn from_json(json: &str) -> GameResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_variant(variant: VariantConfig) -> Self {
        GameConfig { variant, ..GameConfig::default() }
    }
}
