//! Random playouts and move-tree counting.
//!
//! Neither is needed to play a game. Playouts drive self-play and the
//! randomized property tests; `perft` counts leaf positions of the move
//! tree and is handy for checking move generation against another engine.

use crate::board::{Board, Side};
use crate::game::{advance, Turn};
use crate::rules::RuleConfig;
use crate::terminal::{is_terminal, winner, Outcome};

/// Upper bound on turns in one playout. Every turn moves at least one
/// stone forward and stores never give stones back, so real games stay
/// far below this.
pub const MAX_PLAYOUT_TURNS: usize = 1000;

/// Finished (or abandoned) random game.
#[derive(Debug, Clone)]
pub struct Playout {
    /// Every turn in order, with the side that played it and the pit chosen.
    pub turns: Vec<(Side, usize, Turn)>,
    /// Board after the last turn.
    pub board: Board,
    /// `None` only if the turn limit was hit.
    pub outcome: Option<Outcome>,
}

/// Pick a legal pit for `mover` uniformly at random.
pub fn random_move(board: &Board, mover: Side, rng: &mut fastrand::Rng) -> Option<usize> {
    let moves: Vec<usize> = board.legal_moves(mover).collect();
    if moves.is_empty() {
        None
    } else {
        Some(moves[rng.usize(..moves.len())])
    }
}

/// Play uniformly random moves from `board` until the round ends.
pub fn random_playout(
    board: &Board,
    mover: Side,
    rules: &RuleConfig,
    rng: &mut fastrand::Rng,
) -> Playout {
    let mut board = *board;
    let mut mover = mover;
    let mut turns = Vec::new();

    while !is_terminal(&board) && turns.len() < MAX_PLAYOUT_TURNS {
        let Some(pit) = random_move(&board, mover, rng) else {
            break;
        };
        let turn = advance(&board, pit, mover, rules);
        turns.push((mover, pit, turn));
        board = turn.board;
        mover = turn.next_mover;
    }

    Playout {
        turns,
        board,
        outcome: winner(&board),
    }
}

/// Count the leaf positions `depth` plies below `board`.
///
/// An extra turn is its own ply. A terminal board counts as one leaf
/// whatever depth remains.
pub fn perft(board: &Board, mover: Side, depth: u8, rules: &RuleConfig) -> u64 {
    if depth == 0 || is_terminal(board) {
        return 1;
    }
    board
        .legal_moves(mover)
        .map(|pit| {
            let turn = advance(board, pit, mover, rules);
            perft(&turn.board, turn.next_mover, depth - 1, rules)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PITS, TOTAL_STONES};

    #[test]
    fn test_perft_shallow() {
        let rules = RuleConfig::default();
        let board = Board::new();
        assert_eq!(perft(&board, Side::A, 0, &rules), 1);
        assert_eq!(perft(&board, Side::A, 1, &rules), 6);
        // Every opening move leaves B with six non-empty pits.
        assert_eq!(perft(&board, Side::A, 2, &rules), 36);
    }

    #[test]
    fn test_perft_terminal_is_leaf() {
        let board = Board::from_parts([0; PITS], [1; PITS], 0, 0);
        assert_eq!(perft(&board, Side::B, 5, &RuleConfig::default()), 1);
    }

    #[test]
    fn test_random_playout_finishes() {
        let mut rng = fastrand::Rng::with_seed(7);
        let playout = random_playout(&Board::new(), Side::A, &RuleConfig::default(), &mut rng);
        assert!(playout.outcome.is_some());
        assert!(is_terminal(&playout.board));
        assert_eq!(playout.board.total_stones(), TOTAL_STONES);
        assert!(!playout.turns.is_empty());
    }

    #[test]
    fn test_random_move_none_on_empty_row() {
        let mut rng = fastrand::Rng::with_seed(1);
        let board = Board::from_parts([0; PITS], [1; PITS], 0, 0);
        assert_eq!(random_move(&board, Side::A, &mut rng), None);
    }
}
