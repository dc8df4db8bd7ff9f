//! End-of-round detection and the final sweep.
//!
//! A round ends as soon as either row is empty. The row that still holds
//! stones is swept into its owner's store. The empty row contributes nothing.

use std::fmt;

use crate::board::{Board, Side};

/// Final result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Side),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(side) => write!(f, "{side} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Whether either row is empty.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    board.row_is_empty(Side::A) || board.row_is_empty(Side::B)
}

/// Sweep the board if the round is over, otherwise return it unchanged.
pub fn check_terminal(board: &Board) -> Board {
    let mut next = *board;
    if !is_terminal(board) {
        return next;
    }
    for side in [Side::A, Side::B] {
        let row = std::mem::take(next.pits_mut(side));
        // Saturating, so an overflow surfaces as a conservation failure.
        let banked = row.iter().fold(0u16, |sum, &n| sum.saturating_add(n));
        let store = next.store_mut(side);
        *store = store.saturating_add(banked);
    }
    next
}

/// Winner of a finished round, or `None` while it is still in progress.
///
/// A terminal board that has not been swept yet is scored as if it had.
pub fn winner(board: &Board) -> Option<Outcome> {
    if !is_terminal(board) {
        return None;
    }
    let swept = check_terminal(board);
    let (a, b) = (swept.store(Side::A), swept.store(Side::B));
    Some(match a.cmp(&b) {
        std::cmp::Ordering::Greater => Outcome::Win(Side::A),
        std::cmp::Ordering::Less => Outcome::Win(Side::B),
        std::cmp::Ordering::Equal => Outcome::Draw,
    })
}
