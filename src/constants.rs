//! Constants for board geometry, search defaults, and evaluator weights.
//!
//! The layout is fixed: two rows of six pits, four stones per pit at setup,
//! and one store per player.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of pits on each player's row.
pub const PITS: usize = 6;

/// Stones placed in every pit at the start of a round.
pub const STONES_PER_PIT: u16 = 4;

/// Stones in play for one round. Conserved by every engine step.
pub const TOTAL_STONES: u32 = (PITS as u32) * (STONES_PER_PIT as u32) * 2;

/// Index of the pit nearest to its owner's store.
pub const LAST_PIT: usize = PITS - 1;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies. An extra turn counts as its own ply.
pub const DEFAULT_DEPTH: u8 = 5;

/// Largest depth the hosts accept.
pub const MAX_DEPTH: u8 = 12;

// =============================================================================
// Evaluator Weights
// =============================================================================

/// Weight of the on-board stone difference.
pub const MATERIAL_WEIGHT: f64 = 0.3;

/// Weight of the positional term (stones weighted by `index + 1`).
pub const POSITIONAL_WEIGHT: f64 = 0.1;
