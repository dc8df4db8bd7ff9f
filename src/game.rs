//! Turn execution and round state for hosts.
//!
//! [`apply_turn`] runs sowing, rule resolution and the terminal sweep as one
//! step and checks stone conservation after each stage. [`Game`] wraps the
//! turn state a host needs to keep: the board, whose move it is, and the
//! result once the round is over.

use crate::board::{Board, Side, Slot};
use crate::error::{EngineError, InvalidMove, Step};
use crate::rules::{resolve, Resolution, RuleConfig};
use crate::search::best_move;
use crate::sowing::{sow, sow_unchecked};
use crate::terminal::{check_terminal, is_terminal, winner, Outcome};

/// Everything a host needs to know after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Board after sowing, rules and (if the round ended) the sweep.
    pub board: Board,
    /// Slot that received the last sown stone.
    pub landing: Slot,
    /// Rule that fired after sowing.
    pub resolution: Resolution,
    /// Side to move next. Equal to the mover after an extra turn.
    pub next_mover: Side,
    pub round_over: bool,
    /// Set once the round is over.
    pub winner: Option<Outcome>,
}

/// Opening board for a new round.
pub fn new_round() -> Board {
    Board::new()
}

/// Play pit `pit` for `mover`.
///
/// Fails with [`EngineError::InvalidMove`] for an out-of-range or empty pit,
/// or when the round is already over. Fails with
/// [`EngineError::InvariantViolation`] if a stage loses or creates stones.
pub fn apply_turn(
    board: &Board,
    pit: usize,
    mover: Side,
    rules: &RuleConfig,
) -> Result<Turn, EngineError> {
    if is_terminal(board) {
        return Err(InvalidMove::RoundOver.into());
    }
    let expected = board.total_stones();

    let sowing = sow(board, pit, mover)?;
    check_conservation(Step::Sowing, &sowing.board, expected)?;

    let (resolved, resolution) = resolve(&sowing.board, sowing.landing, mover, rules);
    check_conservation(Step::Resolution, &resolved, expected)?;

    let swept = check_terminal(&resolved);
    check_conservation(Step::Sweep, &swept, expected)?;

    Ok(finish(swept, sowing.landing, resolution, mover))
}

/// Unchecked turn for search and playouts. `pit` must be a legal move.
pub(crate) fn advance(board: &Board, pit: usize, mover: Side, rules: &RuleConfig) -> Turn {
    let sowing = sow_unchecked(board, pit, mover);
    let (resolved, resolution) = resolve(&sowing.board, sowing.landing, mover, rules);
    let swept = check_terminal(&resolved);
    debug_assert_eq!(swept.total_stones(), board.total_stones());
    finish(swept, sowing.landing, resolution, mover)
}

fn finish(board: Board, landing: Slot, resolution: Resolution, mover: Side) -> Turn {
    let round_over = is_terminal(&board);
    let next_mover = if resolution.mover_plays_again() {
        mover
    } else {
        mover.opponent()
    };
    Turn {
        board,
        landing,
        resolution,
        next_mover,
        round_over,
        winner: winner(&board),
    }
}

fn check_conservation(step: Step, board: &Board, expected: u32) -> Result<(), EngineError> {
    let found = board.total_stones();
    if found == expected {
        Ok(())
    } else {
        log::error!("stone count changed during {step}: {expected} -> {found}");
        Err(EngineError::InvariantViolation {
            step,
            expected,
            found,
        })
    }
}

/// Turn state for one round, owned by the host.
///
/// Keeps a stack of earlier positions so a host can step back.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    mover: Side,
    rules: RuleConfig,
    history: Vec<(Board, Side)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

impl Game {
    /// Start a round from the opening board with side A to move.
    pub fn new(rules: RuleConfig) -> Self {
        Self::from_position(new_round(), Side::A, rules)
    }

    /// Start from an arbitrary position.
    pub fn from_position(board: Board, mover: Side, rules: RuleConfig) -> Self {
        Self {
            board,
            mover,
            rules,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is.
    #[inline]
    pub fn mover(&self) -> Side {
        self.mover
    }

    #[inline]
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: RuleConfig) {
        self.rules = rules;
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        is_terminal(&self.board)
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        winner(&self.board)
    }

    /// Number of turns played since the last reset.
    #[inline]
    pub fn turns_played(&self) -> usize {
        self.history.len()
    }

    /// Play `pit` for `side`. The board is left unchanged on error.
    pub fn play(&mut self, side: Side, pit: usize) -> Result<Turn, EngineError> {
        if self.is_over() {
            return Err(InvalidMove::RoundOver.into());
        }
        if side != self.mover {
            return Err(InvalidMove::WrongOwner {
                owner: side,
                mover: self.mover,
            }
            .into());
        }
        let turn = apply_turn(&self.board, pit, side, &self.rules)?;
        self.history.push((self.board, self.mover));
        self.board = turn.board;
        self.mover = turn.next_mover;
        Ok(turn)
    }

    /// Let the search pick and play a move for the side to move.
    ///
    /// Returns `Ok(None)` if the round is already over.
    pub fn engine_move(&mut self, depth: u8) -> Result<Option<(usize, Turn)>, EngineError> {
        if self.is_over() {
            return Ok(None);
        }
        let Some(pit) = best_move(&self.board, self.mover, depth, &self.rules) else {
            return Ok(None);
        };
        let turn = self.play(self.mover, pit)?;
        Ok(Some((pit, turn)))
    }

    /// Take back the last turn. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((board, mover)) => {
                self.board = board;
                self.mover = mover;
                true
            }
            None => false,
        }
    }

    /// Start a fresh round with the same rules.
    pub fn reset(&mut self) {
        self.board = new_round();
        self.mover = Side::A;
        self.history.clear();
    }
}
