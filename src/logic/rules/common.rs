//! Helpers shared by the variant rules.

use itertools::Itertools;

use crate::components::card::Card;
use crate::components::stack::{Deck, DeckId, StackType};
use crate::ecs::entity::Entity;
use crate::error::GameResult;
use crate::world::Board;

/// Everything a legality check looks at for one move.
///
/// `card` is the bottom card of the moving unit. Whether the unit is a
/// single card or a run is answered by `is_single` and `run_len`, which
/// read the source deck above `entity`.
pub(crate) struct MoveContext<'a> {
    pub entity: Entity,
    pub card: &'a Card,
    /// Deck the card is leaving.
    pub source: &'a Deck,
    pub target: &'a Deck,
    /// Card the moving unit would land on; `None` for an empty target.
    pub target_top: Option<&'a Card>,
}

impl<'a> MoveContext<'a> {
    /// None when either side is unknown or the card already sits in `target`.
    pub fn new(board: &'a Board, target: DeckId, entity: Entity) -> Option<Self> {
        let card = board.card(entity).ok()?;
        let source = board.deck(card.owner()?).ok()?;
        let target = board.deck(target).ok()?;
        if source.id == target.id {
            return None;
        }
        let target_top = match target.top_card() {
            Some(top) => Some(board.card(top).ok()?),
            None => None,
        };
        Some(MoveContext { entity, card, source, target, target_top })
    }

    /// The move carries exactly one card.
    pub fn is_single(&self) -> bool {
        self.source.top_card() == Some(self.entity)
    }

    /// Cards moving with `entity`, itself included.
    pub fn run_len(&self) -> usize {
        self.source.amount_from(self.entity)
    }
}

// Link predicates for `top_run_len`. `lower` sits beneath `upper` in the pile.

/// Klondike and Freecell runs: red on black, black on red.
pub(crate) fn alternating_colors(lower: &Card, upper: &Card) -> bool {
    lower.color() != upper.color()
}

/// Spider runs: one suit throughout.
pub(crate) fn same_suit(lower: &Card, upper: &Card) -> bool {
    lower.suit == upper.suit
}

/// Length of the descending face-up run at the top of `cards` (bottom first),
/// where each pair also satisfies `links(lower, upper)`.
///
/// The pile is walked from the top down. Reversed, `tuple_windows` yields
/// `(upper, lower)` pairs: the first item is nearer the top, so a valid
/// link needs `upper` exactly one rank below `lower`. The walk stops at the
/// first broken link or face-down card; the top card alone counts as a run
/// of one when it is face up, and an empty or face-down top gives zero.
///
/// `[K, Q, J]` with alternating colors is a run of 3; `[K, J, 10]` is a
/// run of 2 because J does not sit on a queen.
pub(crate) fn top_run_len<F>(cards: &[&Card], links: F) -> usize
where
    F: Fn(&Card, &Card) -> bool,
{
    match cards.last() {
        Some(top) if top.is_face_up => {
            1 + cards
                .iter()
                .rev()
                // (upper, lower), top of the pile first
                .tuple_windows()
                .take_while(|(upper, lower)| {
                    lower.is_face_up && upper.rank.is_one_below(lower.rank) && links(lower, upper)
                })
                .count()
        }
        _ => 0,
    }
}

/// Marks the top run of a deck draggable and everything below it locked.
pub(crate) fn mark_run_from_top<F>(board: &mut Board, deck: DeckId, links: F) -> GameResult<()>
where
    F: Fn(&Card, &Card) -> bool,
{
    let run = top_run_len(&board.cards_in(deck)?, links);
    mark_top(board, deck, run)
}

/// Marks the top `amount` cards draggable and the rest locked. An `amount`
/// of zero locks the whole deck.
pub(crate) fn mark_top(board: &mut Board, deck: DeckId, amount: usize) -> GameResult<()> {
    let entities = board.deck(deck)?.cards().to_vec();
    let first_draggable = entities.len().saturating_sub(amount);
    for (index, entity) in entities.into_iter().enumerate() {
        board.card_mut(entity)?.is_draggable = index >= first_draggable;
    }
    Ok(())
}

/// Heuristic for auto-complete: true when moving `card` from `source` onto
/// `target` only swaps it between equivalent resting places.
///
/// Moving the bottom card of a deck onto an empty non-foundation deck gains
/// nothing, and neither does moving a card off a face-up card of the same rank
/// as the target's top. Cards leaving the waste always make progress.
pub(crate) fn shuffles_without_progress(ctx: &MoveContext<'_>, board: &Board, match_color: bool) -> bool {
    if ctx.source.stack_type == StackType::Waste {
        return false;
    }
    let previous = ctx.source.previous_of(ctx.entity).and_then(|below| board.card(below).ok());
    match (previous, ctx.target_top) {
        (None, None) => !ctx.target.stack_type.is_foundation(),
        (Some(previous), Some(top)) => {
            previous.is_face_up && previous.rank == top.rank && (!match_color || previous.color() == top.color())
        }
        _ => false,
    }
}
