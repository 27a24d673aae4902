// src/config/layout.rs
//! Pile counts and deal shapes for each variant.

pub const RANKS_PER_SUIT: usize = 13;
pub const STANDARD_DECK_SIZE: usize = 52;
pub const SPIDER_DECK_SIZE: usize = 104;

pub const KLONDIKE_FOUNDATION_COUNT: usize = 4;
pub const KLONDIKE_TABLEAU_COUNT: usize = 7;

pub const SPIDER_FOUNDATION_COUNT: usize = 8;
pub const SPIDER_TABLEAU_COUNT: usize = 10;
/// The first columns get one extra card in the Spider deal (6 instead of 5).
pub const SPIDER_LONG_COLUMNS: usize = 4;
pub const SPIDER_SHORT_COLUMN_DEPTH: usize = 5;

pub const FREECELL_FOUNDATION_COUNT: usize = 4;
pub const FREECELL_TABLEAU_COUNT: usize = 8;
pub const MAX_FREE_CELLS: usize = 4;

pub const KLONDIKE_EASY_REPLACE_AMOUNT: usize = 16;
pub const FREECELL_EASY_REPLACE_AMOUNT: usize = 25;
/// Klondike Easy keeps cards of this rank and above out of the tableau deal.
pub const KLONDIKE_EASY_HIGH_RANK: u8 = 7;
/// Freecell Easy keeps cards of this rank and below away from the buried slots.
pub const FREECELL_EASY_LOW_RANK: u8 = 6;
