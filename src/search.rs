//! Minimax search with alpha-beta pruning.
//!
//! Side B maximizes the evaluator score and side A minimizes it. The role
//! at each node follows whoever is about to move, not the ply parity,
//! because an extra turn lets one side move twice in a row.
//!
//! Moves are tried in ascending pit order and a move only replaces the
//! current best if it is strictly better, so the choice is deterministic
//! for a given board and depth.
//!
//! # Example
//!
//! ```
//! use mangala::board::{Board, Side};
//! use mangala::rules::RuleConfig;
//! use mangala::search::Searcher;
//!
//! let mut searcher = Searcher::new(RuleConfig::default());
//! let result = searcher.search(&Board::new(), Side::A, 4);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Side};
use crate::eval::evaluate;
use crate::game::advance;
use crate::rules::RuleConfig;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,
    /// Branches cut by alpha-beta.
    pub cutoffs: u64,
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best pit for the side to move, or `None` if it has no legal move.
    pub best_move: Option<usize>,
    /// Minimax value of the best move, from side B's point of view.
    pub score: f64,
    pub stats: SearchStats,
}

/// Alpha-beta searcher for one rule set.
#[derive(Debug, Clone)]
pub struct Searcher {
    rules: RuleConfig,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(rules: RuleConfig) -> Self {
        Self {
            rules,
            stats: SearchStats::default(),
        }
    }

    /// Pick a move for `mover`, looking `depth` plies ahead.
    ///
    /// A depth of 0 scores each candidate move's resulting board directly.
    pub fn search(&mut self, board: &Board, mover: Side, depth: u8) -> SearchResult {
        self.stats = SearchStats::default();
        self.stats.nodes += 1;

        let maximizing = mover == Side::B;
        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;
        let mut best_move = None;
        let mut best_score = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for pit in board.legal_moves(mover) {
            let turn = advance(board, pit, mover, &self.rules);
            let score = self.alpha_beta(
                &turn.board,
                turn.next_mover,
                depth.saturating_sub(1),
                alpha,
                beta,
            );
            let improves = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if improves || best_move.is_none() {
                best_score = score;
                best_move = Some(pit);
            }
            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
        }

        if best_move.is_none() {
            best_score = evaluate(board);
        }

        log::debug!(
            "search {mover} depth {depth}: best {:?} score {:.2} nodes {} cutoffs {}",
            best_move,
            best_score,
            self.stats.nodes,
            self.stats.cutoffs
        );

        SearchResult {
            best_move,
            score: best_score,
            stats: self.stats,
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        mover: Side,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        self.stats.nodes += 1;

        // Boards coming out of `advance` are already swept when terminal.
        if depth == 0 || crate::terminal::is_terminal(board) {
            return evaluate(board);
        }

        if mover == Side::B {
            let mut value = f64::NEG_INFINITY;
            for pit in board.legal_moves(mover) {
                let turn = advance(board, pit, mover, &self.rules);
                let score = self.alpha_beta(&turn.board, turn.next_mover, depth - 1, alpha, beta);
                value = value.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        } else {
            let mut value = f64::INFINITY;
            for pit in board.legal_moves(mover) {
                let turn = advance(board, pit, mover, &self.rules);
                let score = self.alpha_beta(&turn.board, turn.next_mover, depth - 1, alpha, beta);
                value = value.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            value
        }
    }

    /// Statistics from the most recent search.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Best pit for `mover`, or `None` when it has no legal move.
pub fn best_move(board: &Board, mover: Side, depth: u8, rules: &RuleConfig) -> Option<usize> {
    Searcher::new(*rules).search(board, mover, depth).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PITS;

    /// Plain minimax without pruning, for comparison.
    fn minimax(board: &Board, mover: Side, depth: u8, rules: &RuleConfig) -> f64 {
        if depth == 0 || crate::terminal::is_terminal(board) {
            return evaluate(board);
        }
        let scores = board.legal_moves(mover).map(|pit| {
            let turn = advance(board, pit, mover, rules);
            minimax(&turn.board, turn.next_mover, depth - 1, rules)
        });
        if mover == Side::B {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.fold(f64::INFINITY, f64::min)
        }
    }

    /// Minimax that flips roles every ply, ignoring extra turns.
    fn alternating_minimax(
        board: &Board,
        mover: Side,
        maximizing: bool,
        depth: u8,
        rules: &RuleConfig,
    ) -> f64 {
        if depth == 0 || crate::terminal::is_terminal(board) {
            return evaluate(board);
        }
        let scores = board.legal_moves(mover).map(|pit| {
            let turn = advance(board, pit, mover, rules);
            alternating_minimax(&turn.board, turn.next_mover, !maximizing, depth - 1, rules)
        });
        if maximizing {
            scores.fold(f64::NEG_INFINITY, f64::max)
        } else {
            scores.fold(f64::INFINITY, f64::min)
        }
    }

    #[test]
    fn test_equal_scores_keep_lowest_pit() {
        let rules = RuleConfig::default();
        // Every move shifts one stone a pit forward without capturing.
        let cases = [
            (Board::from_parts([1, 1, 1, 1, 0, 0], [1, 0, 0, 0, 0, 0], 0, 0), Side::A),
            (Board::from_parts([1, 0, 0, 0, 0, 0], [1, 1, 1, 1, 0, 0], 0, 0), Side::B),
        ];
        for (board, mover) in cases {
            let scores: Vec<f64> = board
                .legal_moves(mover)
                .map(|pit| evaluate(&advance(&board, pit, mover, &rules).board))
                .collect();
            assert_eq!(scores.len(), 4);
            assert!(scores.iter().all(|&s| s == scores[0]));

            let result = Searcher::new(rules).search(&board, mover, 1);
            assert_eq!(result.best_move, Some(0));
            assert_eq!(result.score, scores[0]);
        }
    }

    #[test]
    fn test_extra_turn_keeps_maximizing_role() {
        // B5 banks its stone and B moves again: B2 then captures A's pit 2
        // with nothing for A to answer. Playing B2 at once scores lower
        // because A replies first.
        let board = Board::from_parts([2, 0, 5, 0, 0, 1], [1, 0, 1, 0, 0, 1], 0, 0);
        let rules = RuleConfig::default();

        let result = Searcher::new(rules).search(&board, Side::B, 2);
        assert_eq!(result.best_move, Some(5));
        assert!((result.score - 5.7).abs() < 1e-9, "score {}", result.score);

        // Flipping roles every ply would score B5 by B's worst follow-up.
        let after_bank = advance(&board, 5, Side::B, &rules);
        assert_eq!(after_bank.next_mover, Side::B);
        let alternating = alternating_minimax(&after_bank.board, Side::B, false, 1, &rules);
        assert!((alternating - -2.6).abs() < 1e-9, "alternating {alternating}");
        let direct = advance(&board, 2, Side::B, &rules);
        let direct_score = alternating_minimax(&direct.board, direct.next_mover, false, 1, &rules);
        assert!((direct_score - 5.5).abs() < 1e-9, "direct {direct_score}");
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        let board = Board::from_parts([0; PITS], [1; PITS], 10, 10);
        assert_eq!(best_move(&board, Side::A, 4, &RuleConfig::default()), None);
    }

    #[test]
    fn test_single_legal_move() {
        let board = Board::from_parts([0, 0, 0, 2, 0, 0], [3; PITS], 0, 0);
        assert_eq!(best_move(&board, Side::A, 4, &RuleConfig::default()), Some(3));
    }

    #[test]
    fn test_prefers_capture_over_banking_one_stone() {
        // Pit 3 captures two stones across from pit 4; pit 5 only banks one.
        let board = Board::from_parts([1; PITS], [0, 0, 0, 2, 0, 1], 0, 0);
        let mut searcher = Searcher::new(RuleConfig::default());
        let result = searcher.search(&board, Side::B, 1);
        assert_eq!(result.best_move, Some(3));
        assert!((result.score - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        let rules = RuleConfig::default();
        let boards = [
            (Board::new(), Side::A),
            (Board::new(), Side::B),
            (
                Board::from_parts([0, 5, 1, 0, 7, 2], [3, 0, 0, 6, 1, 1], 10, 12),
                Side::A,
            ),
            (
                Board::from_parts([2, 0, 0, 9, 0, 1], [0, 4, 0, 1, 0, 3], 14, 14),
                Side::B,
            ),
        ];
        for (board, mover) in boards {
            for depth in 1..=5 {
                let mut searcher = Searcher::new(rules);
                let result = searcher.search(&board, mover, depth);
                let best = result.best_move.unwrap();
                let turn = advance(&board, best, mover, &rules);
                let expected = minimax(&turn.board, turn.next_mover, depth - 1, &rules);
                assert!(
                    (result.score - expected).abs() < 1e-9,
                    "depth {depth}: {} vs {expected}",
                    result.score
                );
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::from_parts([0, 5, 1, 0, 7, 2], [3, 0, 0, 6, 1, 1], 10, 12);
        let rules = RuleConfig::default();
        let first = best_move(&board, Side::B, 6, &rules);
        for _ in 0..3 {
            assert_eq!(best_move(&board, Side::B, 6, &rules), first);
        }
    }

    #[test]
    fn test_stats_count_nodes() {
        let mut searcher = Searcher::new(RuleConfig::default());
        let result = searcher.search(&Board::new(), Side::A, 3);
        assert!(result.stats.nodes > 6);
        assert_eq!(searcher.stats(), result.stats);
    }
}
