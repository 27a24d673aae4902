// src/config/mod.rs

pub mod layout;
pub mod rules;
pub mod scoring;

pub use rules::{
    AutoCompleteMode, Difficulty, DrawRule, FreeCellCount, GameConfig, SpiderSuits, UndoPolicy, Variant,
    VariantConfig,
};
pub use scoring::ScoringConfig;
