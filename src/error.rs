//! Error types for move validation and engine integrity checks.

use thiserror::Error;

use crate::board::Side;
use crate::constants::PITS;

/// A move the caller asked for that cannot be played.
///
/// Always recoverable: the board is left untouched and the host should
/// ask for another move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("pit {pit} is out of range (expected 0..{})", PITS)]
    OutOfRange { pit: usize },
    #[error("side {owner} cannot move: it is {mover}'s turn")]
    WrongOwner { owner: Side, mover: Side },
    #[error("pit {pit} on side {side} is empty")]
    EmptyPit { side: Side, pit: usize },
    #[error("the round is over")]
    RoundOver,
}

/// Engine step that broke stone conservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Sowing,
    Resolution,
    Sweep,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Sowing => write!(f, "sowing"),
            Step::Resolution => write!(f, "rule resolution"),
            Step::Sweep => write!(f, "terminal sweep"),
        }
    }
}

/// Errors returned by [`apply_turn`](crate::game::apply_turn).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid move: {0}")]
    InvalidMove(#[from] InvalidMove),
    /// An engine bug. Never retried or patched up.
    #[error("stone conservation violated after {step}: expected {expected}, found {found}")]
    InvariantViolation { step: Step, expected: u32, found: u32 },
}
