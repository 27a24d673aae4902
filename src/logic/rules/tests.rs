// src/logic/rules/tests.rs
//! Unit tests for the rules module.

use super::*;
use crate::components::card::{CardColor, Suit};
use crate::config::rules::{DrawRule, Difficulty, FreeCellCount, SpiderSuits};
use crate::error::GameError;

// --- helpers ---

/// Card number of `suit`/`rank` in the first 52-card deck.
fn n(suit: Suit, rank: usize) -> usize {
    let suit_index = match suit {
        Suit::Spade => 0,
        Suit::Heart => 1,
        Suit::Club => 2,
        Suit::Diamond => 3,
    };
    suit_index * 13 + rank - 1
}

/// A board of the rules' layout with only the listed cards on it, face up,
/// bottom first. The rest of the universe stays off the table.
fn table(rules: &dyn VariantRules, piles: &[(StackType, &[usize])]) -> Board {
    let mut board = Board::new(
        *rules.config(),
        &rules.deck_layout(),
        rules.card_universe_size(),
        rules.suit_count(),
    );
    for (stack_type, numbers) in piles {
        let deck = board.find_deck(*stack_type).expect("deck in layout");
        for &number in numbers.iter() {
            board.place(Entity(number), deck).unwrap();
            board.card_mut(Entity(number)).unwrap().is_face_up = true;
        }
    }
    refresh_all_draggable(&mut board, rules).unwrap();
    board
}

fn klondike(draw: DrawRule) -> Box<dyn VariantRules> {
    rules_for(&VariantConfig::Klondike { draw, difficulty: Difficulty::Normal })
}

fn spider() -> Box<dyn VariantRules> {
    rules_for(&VariantConfig::Spider { suits: SpiderSuits::FourSuits })
}

fn freecell() -> Box<dyn VariantRules> {
    rules_for(&VariantConfig::Freecell { free_cells: FreeCellCount::Four, difficulty: Difficulty::Normal })
}

fn deck_of(board: &Board, stack_type: StackType) -> DeckId {
    board.find_deck(stack_type).expect("deck in layout")
}

// --- tests ---

#[test]
fn test_card_color() {
    assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
    assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
    assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
    println!("card colors: ok");
}

#[test]
fn test_top_run_is_counted_from_the_top_down() {
    let rules = klondike(DrawRule::DrawOne);
    let board = table(
        rules.as_ref(),
        &[
            (StackType::Tableau(0), &[n(Suit::Spade, 13), n(Suit::Heart, 12), n(Suit::Club, 11)]),
            (StackType::Tableau(1), &[n(Suit::Spade, 13), n(Suit::Heart, 11), n(Suit::Club, 10)]),
        ],
    );
    let run_of = |stack_type| {
        let cards = board.cards_in(deck_of(&board, stack_type)).unwrap();
        super::common::top_run_len(&cards, super::common::alternating_colors)
    };
    assert_eq!(run_of(StackType::Tableau(0)), 3);
    assert_eq!(run_of(StackType::Tableau(1)), 2, "the jack does not sit on a queen");
    assert_eq!(run_of(StackType::Tableau(2)), 0, "empty pile");
}

#[test]
fn test_foundation_accepts_only_the_next_rank() {
    let rules = klondike(DrawRule::DrawOne);
    let king = n(Suit::Spade, 13);
    let two = n(Suit::Spade, 2);
    let ace = n(Suit::Spade, 1);
    let mut board = table(
        rules.as_ref(),
        &[(StackType::Tableau(0), &[king]), (StackType::Tableau(1), &[two]), (StackType::Tableau(2), &[ace])],
    );
    let foundation = deck_of(&board, StackType::Foundation(0));

    assert!(!rules.can_accept(&board, foundation, Entity(king)), "king on an empty foundation");
    assert!(!rules.can_accept(&board, foundation, Entity(two)), "two on an empty foundation");
    assert!(rules.can_accept(&board, foundation, Entity(ace)), "ace starts a foundation");

    let from = board.owner_of(Entity(ace)).unwrap();
    board.transfer(from, Entity(ace), foundation).unwrap();
    assert!(rules.can_accept(&board, foundation, Entity(two)));
    assert!(!rules.can_accept(&board, foundation, Entity(king)));
}

#[test]
fn test_foundation_rejects_other_suit() {
    let rules = klondike(DrawRule::DrawOne);
    let ace = n(Suit::Spade, 1);
    let two_hearts = n(Suit::Heart, 2);
    let board = table(
        rules.as_ref(),
        &[(StackType::Foundation(0), &[ace]), (StackType::Tableau(0), &[two_hearts])],
    );
    let foundation = deck_of(&board, StackType::Foundation(0));
    assert!(!rules.can_accept(&board, foundation, Entity(two_hearts)));
}

#[test]
fn test_klondike_tableau_rules() {
    let rules = klondike(DrawRule::DrawOne);
    let black_king = n(Suit::Spade, 13);
    let red_queen = n(Suit::Heart, 12);
    let black_queen = n(Suit::Club, 12);
    let board = table(
        rules.as_ref(),
        &[
            (StackType::Tableau(0), &[black_king]),
            (StackType::Tableau(1), &[red_queen]),
            (StackType::Tableau(3), &[black_queen]),
        ],
    );
    let t0 = deck_of(&board, StackType::Tableau(0));
    let empty = deck_of(&board, StackType::Tableau(2));

    assert!(rules.can_accept(&board, t0, Entity(red_queen)), "red on black, one lower");
    assert!(!rules.can_accept(&board, t0, Entity(black_queen)), "same color");
    assert!(rules.can_accept(&board, empty, Entity(black_king)), "kings fill empty tableaus");
    assert!(!rules.can_accept(&board, empty, Entity(red_queen)), "only kings fill empty tableaus");
    assert!(!rules.can_accept(&board, t0, Entity(black_king)), "a card cannot move onto its own deck");
}

#[test]
fn test_klondike_draggable_run_is_alternating() {
    let rules = klondike(DrawRule::DrawOne);
    let cards = [n(Suit::Club, 9), n(Suit::Spade, 8), n(Suit::Heart, 7), n(Suit::Club, 6)];
    let board = table(rules.as_ref(), &[(StackType::Tableau(0), &cards)]);
    let draggable: Vec<bool> = cards.iter().map(|&c| board.card(Entity(c)).unwrap().is_draggable).collect();
    // Spade 8 on Club 9 breaks the colors, so the run starts at the spade.
    assert_eq!(draggable, vec![false, true, true, true]);
}

#[test]
fn test_klondike_stock_draw_three_and_recycle() {
    let rules = klondike(DrawRule::DrawThree);
    let stock_cards = [n(Suit::Club, 3), n(Suit::Club, 4), n(Suit::Club, 5), n(Suit::Club, 6)];
    let mut board = table(rules.as_ref(), &[(StackType::Stock, &stock_cards)]);
    let stock = board.stock_id().unwrap();
    let waste = board.waste_id().unwrap();
    let original = board.deck(stock).unwrap().cards().to_vec();

    let first = rules.on_stock_click(&mut board).unwrap();
    assert_eq!(
        first,
        StockOutcome::Drawn(vec![Entity(stock_cards[3]), Entity(stock_cards[2]), Entity(stock_cards[1])])
    );
    let waste_top = board.deck(waste).unwrap().top_card().unwrap();
    assert!(board.card(waste_top).unwrap().is_draggable);
    assert_eq!(board.deck(waste).unwrap().cards().iter().filter(|&&c| board.card(c).unwrap().is_draggable).count(), 1);

    assert_eq!(rules.on_stock_click(&mut board).unwrap(), StockOutcome::Drawn(vec![Entity(stock_cards[0])]));
    assert_eq!(rules.on_stock_click(&mut board).unwrap(), StockOutcome::Recycled(4));
    assert_eq!(board.deck(stock).unwrap().cards(), original.as_slice(), "recycling restores the stock order");
    assert!(board.deck(waste).unwrap().is_empty());
    assert!(!board.card(original[0]).unwrap().is_face_up);
}

#[test]
fn test_klondike_stock_with_nothing_left() {
    let rules = klondike(DrawRule::DrawOne);
    let mut board = table(rules.as_ref(), &[]);
    assert!(matches!(rules.on_stock_click(&mut board), Err(GameError::StockUnavailable)));
}

#[test]
fn test_stock_waste_rules() {
    assert!(can_deal_from_stock(false));
    assert!(!can_reset_stock_from_waste(false, false));
    assert!(!can_reset_stock_from_waste(false, true));

    assert!(!can_deal_from_stock(true));
    assert!(can_reset_stock_from_waste(true, false));
    assert!(!can_reset_stock_from_waste(true, true));
}

#[test]
fn test_spider_builds_down_in_any_suit() {
    let rules = spider();
    let ten = n(Suit::Spade, 10);
    let nine_hearts = n(Suit::Heart, 9);
    let ace = n(Suit::Spade, 1);
    let board = table(
        rules.as_ref(),
        &[
            (StackType::Tableau(0), &[ten]),
            (StackType::Tableau(1), &[nine_hearts]),
            (StackType::Tableau(2), &[ace]),
        ],
    );
    let t0 = deck_of(&board, StackType::Tableau(0));
    let foundation = deck_of(&board, StackType::Foundation(0));
    let empty = deck_of(&board, StackType::Tableau(3));

    assert!(rules.can_accept(&board, t0, Entity(nine_hearts)));
    assert!(rules.can_accept(&board, empty, Entity(nine_hearts)), "any card fills an empty tableau");
    assert!(!rules.can_accept(&board, foundation, Entity(ace)), "foundations take no manual moves");
}

#[test]
fn test_spider_draggable_needs_one_suit() {
    let rules = spider();
    let mixed = [n(Suit::Spade, 10), n(Suit::Heart, 9)];
    // second deck copies are offset by 52
    let suited = [n(Suit::Spade, 10) + 52, n(Suit::Spade, 9) + 52];
    let board = table(
        rules.as_ref(),
        &[(StackType::Tableau(0), &mixed), (StackType::Tableau(1), &suited)],
    );
    assert!(!board.card(Entity(mixed[0])).unwrap().is_draggable);
    assert!(board.card(Entity(mixed[1])).unwrap().is_draggable);
    assert!(suited.iter().all(|&c| board.card(Entity(c)).unwrap().is_draggable));
}

#[test]
fn test_spider_completed_run_collapses() {
    let rules = spider();
    let mut column = vec![n(Suit::Heart, 5)];
    column.extend((1..=13).rev().map(|rank| n(Suit::Spade, rank)));
    let mut board = table(rules.as_ref(), &[(StackType::Tableau(0), &column)]);
    let t0 = deck_of(&board, StackType::Tableau(0));

    let foundation = rules.try_auto_collapse_run(&mut board, t0).unwrap();
    assert_eq!(foundation, Some(deck_of(&board, StackType::Foundation(0))));
    assert_eq!(board.deck(DeckId(0)).unwrap().count(), 13);
    assert_eq!(board.deck(t0).unwrap().cards(), &[Entity(n(Suit::Heart, 5))]);
    assert!(board.card(Entity(n(Suit::Heart, 5))).unwrap().is_draggable);

    assert_eq!(rules.try_auto_collapse_run(&mut board, t0).unwrap(), None);
    assert_eq!(rules.move_score(&ScoringConfig::default(), StackType::Tableau(1)), 10);
}

#[test]
fn test_spider_partial_run_stays() {
    let rules = spider();
    let column: Vec<usize> = (2..=13).rev().map(|rank| n(Suit::Spade, rank)).chain([n(Suit::Heart, 1)]).collect();
    let mut board = table(rules.as_ref(), &[(StackType::Tableau(0), &column)]);
    let t0 = deck_of(&board, StackType::Tableau(0));
    assert_eq!(rules.try_auto_collapse_run(&mut board, t0).unwrap(), None);
    assert_eq!(board.deck(t0).unwrap().count(), 13);
}

#[test]
fn test_spider_stock_needs_every_tableau_filled() {
    let rules = spider();
    let mut board = table(rules.as_ref(), &[(StackType::Stock, &[n(Suit::Club, 4)])]);
    assert!(matches!(rules.on_stock_click(&mut board), Err(GameError::StockUnavailable)));
}

#[test]
fn test_freecell_super_move_limit() {
    let rules = freecell();
    let run: Vec<usize> = [
        (Suit::Spade, 10),
        (Suit::Heart, 9),
        (Suit::Club, 8),
        (Suit::Diamond, 7),
        (Suit::Spade, 6),
        (Suit::Heart, 5),
        (Suit::Club, 4),
        (Suit::Diamond, 3),
        (Suit::Spade, 2),
    ]
    .into_iter()
    .map(|(suit, rank)| n(suit, rank))
    .collect();
    let red_jack = n(Suit::Heart, 11);
    let black_ten = n(Suit::Club, 10);
    let board = table(
        rules.as_ref(),
        &[
            (StackType::Tableau(0), &run),
            (StackType::Tableau(1), &[red_jack]),
            (StackType::Tableau(2), &[black_ten]),
            (StackType::Tableau(3), &[n(Suit::Spade, 13)]),
            (StackType::Tableau(4), &[n(Suit::Diamond, 1)]),
            (StackType::Tableau(5), &[n(Suit::Club, 1)]),
            (StackType::FreeCell(0), &[n(Suit::Diamond, 13)]),
            (StackType::FreeCell(1), &[n(Suit::Club, 13)]),
            (StackType::FreeCell(2), &[n(Suit::Heart, 13)]),
        ],
    );

    // 1 empty cell, 2 empty tableaus: (1 + 1) * 2^2
    assert_eq!(rules.super_move_limit(&board), Some(8));
    assert!(board.card(Entity(run[0])).unwrap().is_draggable);

    let t1 = deck_of(&board, StackType::Tableau(1));
    let t2 = deck_of(&board, StackType::Tableau(2));
    assert!(!rules.can_accept(&board, t1, Entity(run[0])), "nine cards exceed the limit");
    assert!(rules.can_accept(&board, t2, Entity(run[1])), "eight cards fit");
}

#[test]
fn test_freecell_cells_hold_one_card() {
    let rules = freecell();
    let board = table(
        rules.as_ref(),
        &[
            (StackType::Tableau(0), &[n(Suit::Spade, 5), n(Suit::Heart, 4)]),
            (StackType::FreeCell(0), &[n(Suit::Club, 13)]),
        ],
    );
    let cell0 = deck_of(&board, StackType::FreeCell(0));
    let cell1 = deck_of(&board, StackType::FreeCell(1));
    let foundation = deck_of(&board, StackType::Foundation(0));

    assert!(rules.can_accept(&board, cell1, Entity(n(Suit::Heart, 4))));
    assert!(!rules.can_accept(&board, cell0, Entity(n(Suit::Heart, 4))), "occupied cell");
    assert!(!rules.can_accept(&board, cell1, Entity(n(Suit::Spade, 5))), "runs do not park");
    assert!(rules.can_accept(&board, cell1, Entity(n(Suit::Club, 13))), "a parked card may change cells");
    assert!(board.card(Entity(n(Suit::Club, 13))).unwrap().is_draggable);
    assert!(rules.on_stock_click(&mut board.clone()).unwrap() == StockOutcome::NoStock);
    assert!(!rules.can_accept(&board, foundation, Entity(n(Suit::Heart, 4))));
}

#[test]
fn test_foundation_cards_stay_put_outside_klondike() {
    let home = [n(Suit::Heart, 1), n(Suit::Heart, 2)];
    let two = Entity(n(Suit::Heart, 2));

    let rules = klondike(DrawRule::DrawOne);
    let board = table(rules.as_ref(), &[(StackType::Foundation(1), &home)]);
    assert!(board.card(two).unwrap().is_draggable, "Klondike foundation top can come back");

    let rules = freecell();
    let board = table(rules.as_ref(), &[(StackType::Foundation(1), &home)]);
    assert!(board.cards_in(deck_of(&board, StackType::Foundation(1))).unwrap().iter().all(|card| !card.is_draggable));
}

#[test]
fn test_freecell_hints_do_not_shuffle_between_cells() {
    let rules = freecell();
    let board = table(
        rules.as_ref(),
        &[
            (StackType::Tableau(0), &[n(Suit::Spade, 5), n(Suit::Heart, 4)]),
            (StackType::FreeCell(0), &[n(Suit::Club, 13)]),
        ],
    );
    let king = Entity(n(Suit::Club, 13));
    let hints = crate::logic::hints::compute_available_moves(&board, rules.as_ref(), false);
    let king_targets: Vec<StackType> = hints
        .hints
        .iter()
        .filter(|hint| hint.card == king)
        .map(|hint| board.deck(hint.destination).unwrap().stack_type)
        .collect();
    assert!(!king_targets.is_empty(), "the king still has empty tableaus");
    assert!(king_targets.iter().all(|stack_type| !stack_type.is_free_cell()));
    assert!(hints
        .hints
        .iter()
        .any(|hint| hint.card == Entity(n(Suit::Heart, 4)) && board.deck(hint.destination).unwrap().stack_type.is_free_cell()));
    println!("Freecell hint filter: ok");
}

#[test]
fn test_win_condition() {
    assert!(check_win_condition([13, 13, 13, 13]));
    assert!(!check_win_condition([12, 13, 13, 13]));
    assert!(!check_win_condition(Vec::<usize>::new()));
    assert!(check_win_condition([13; 8]));
}

#[test]
fn test_first_accepting_target_uses_scan_order() {
    let rules = klondike(DrawRule::DrawOne);
    let ace = n(Suit::Heart, 1);
    let board = table(rules.as_ref(), &[(StackType::Tableau(0), &[ace])]);
    let candidates = [DeckId(3), DeckId(1), DeckId(2)];
    assert_eq!(first_accepting_target(&board, rules.as_ref(), Entity(ace), &candidates), Some(DeckId(1)));
    assert!(validate_move(&board, rules.as_ref(), Entity(ace), DeckId(0)).is_ok());
}
