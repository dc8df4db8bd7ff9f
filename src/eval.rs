//! Static board evaluation.
//!
//! Scores are from side B's point of view: positive favors B, negative
//! favors A. Store difference dominates, stones still on the row break
//! ties, and stones close to their own store earn a small bonus.

use crate::board::{Board, Side};
use crate::constants::{MATERIAL_WEIGHT, POSITIONAL_WEIGHT};

/// Evaluate `board` for side B.
pub fn evaluate(board: &Board) -> f64 {
    let stores = board.store(Side::B) as f64 - board.store(Side::A) as f64;
    let material = board.row_total(Side::B) as f64 - board.row_total(Side::A) as f64;
    let positional = positional(board, Side::B) - positional(board, Side::A);
    stores + MATERIAL_WEIGHT * material + POSITIONAL_WEIGHT * positional
}

/// Sum of `stones * (index + 1)` over one row.
fn positional(board: &Board, side: Side) -> f64 {
    board
        .pits(side)
        .iter()
        .enumerate()
        .map(|(i, &n)| n as f64 * (i + 1) as f64)
        .sum()
}
