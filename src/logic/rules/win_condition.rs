//! Win detection.

use crate::config::layout::RANKS_PER_SUIT;

/// Won iff there is at least one foundation and every one holds a full suit.
pub fn check_win_condition<I>(foundation_counts: I) -> bool
where
    I: IntoIterator<Item = usize>,
{
    let mut any = false;
    for count in foundation_counts {
        if count != RANKS_PER_SUIT {
            return false;
        }
        any = true;
    }
    any
}
