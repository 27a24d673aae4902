// src/logic/deck.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::components::card::card_identity;
use crate::config::layout::{
    FREECELL_EASY_LOW_RANK, FREECELL_EASY_REPLACE_AMOUNT, KLONDIKE_EASY_HIGH_RANK, KLONDIKE_EASY_REPLACE_AMOUNT,
    KLONDIKE_TABLEAU_COUNT,
};
use crate::config::rules::{Difficulty, VariantConfig};

/// Card numbers `0..universe_size` in order. Index 0 ends up at the bottom of the stock.
pub fn create_card_order(universe_size: usize) -> Vec<usize> {
    (0..universe_size).collect()
}

pub fn new_seed() -> u64 {
    thread_rng().gen()
}

/// Unbiased Fisher-Yates shuffle driven by `seed`, so a deal can be replayed.
pub fn shuffle_order(order: &mut [usize], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    order.shuffle(&mut rng);
}

/// Reorders a shuffled deal for Easy games.
///
/// Cards are dealt from the end of the order, so the tail is what lands on
/// the tableaus first. Klondike Easy pushes high cards out of the tableau part
/// into the stock; Freecell Easy pushes low cards away from the buried half.
pub fn apply_difficulty(order: &mut [usize], config: &VariantConfig, suit_count: usize) {
    if config.difficulty() != Difficulty::Easy {
        return;
    }
    let rank_of = |number: usize| card_identity(number, suit_count).1.value();
    match config {
        VariantConfig::Klondike { .. } => {
            let dealt = KLONDIKE_TABLEAU_COUNT * (KLONDIKE_TABLEAU_COUNT + 1) / 2;
            let split = order.len().saturating_sub(dealt);
            move_unwanted_to_front(order, split, KLONDIKE_EASY_REPLACE_AMOUNT, |n| {
                rank_of(n) >= KLONDIKE_EASY_HIGH_RANK
            });
        }
        VariantConfig::Freecell { .. } => {
            let split = order.len() / 2;
            move_unwanted_to_front(order, split, FREECELL_EASY_REPLACE_AMOUNT, |n| {
                rank_of(n) <= FREECELL_EASY_LOW_RANK
            });
        }
        VariantConfig::Spider { .. } => {}
    }
}

/// Walks `order[split..]` from the back and swaps up to `limit` unwanted cards
/// with wanted ones taken from the front of `order[..split]`.
fn move_unwanted_to_front<F>(order: &mut [usize], split: usize, limit: usize, unwanted: F)
where
    F: Fn(usize) -> bool,
{
    let mut partner = 0;
    let mut swaps = 0;
    for index in (split..order.len()).rev() {
        if swaps == limit {
            break;
        }
        if !unwanted(order[index]) {
            continue;
        }
        while partner < split && unwanted(order[partner]) {
            partner += 1;
        }
        if partner >= split {
            break;
        }
        order.swap(index, partner);
        partner += 1;
        swaps += 1;
    }
}
