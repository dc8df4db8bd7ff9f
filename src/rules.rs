//! Post-sowing rules: extra turns and captures.
//!
//! At most one rule fires per move, checked in this order:
//!
//! 1. **Extra turn** - the last stone landed in the mover's own store.
//! 2. **Even capture** - the last stone landed in an opponent pit and left
//!    it holding an even, non-zero count. The mover banks that pit.
//! 3. **Opposite capture** - the last stone landed in an empty pit on the
//!    mover's own row. If the pit across (`5 - index`) holds stones, both
//!    pits are banked by the mover. If it is empty the lone stone stays put.
//!
//! Rule sets in the wild disagree on two points, so both are switches on
//! [`RuleConfig`].

use crate::board::{Board, Side, Slot};
use crate::constants::LAST_PIT;

/// Variant switches for the rule resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleConfig {
    /// Enable the even capture on the opponent's row (rule 2).
    pub opponent_even_capture: bool,
    /// When an own-row landing faces an empty pit, bank the lone stone
    /// anyway. This is the older rule set; by default the stone stays.
    pub capture_lone_stone: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            opponent_even_capture: true,
            capture_lone_stone: false,
        }
    }
}

/// Which rule fired after a sowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Last stone in the mover's store; the mover plays again.
    ExtraTurn,
    /// An opponent pit was made even and banked.
    EvenCapture { pit: usize, stones: u16 },
    /// An own empty pit and the pit across from it were banked.
    OppositeCapture { pit: usize, opposite: usize, stones: u16 },
    /// The lone stone was banked with nothing across from it.
    LoneStoneBanked { pit: usize },
    /// No rule applied.
    Nothing,
}

impl Resolution {
    /// Whether the mover takes another turn.
    #[inline]
    pub fn mover_plays_again(self) -> bool {
        matches!(self, Resolution::ExtraTurn)
    }

    /// Stones moved into the mover's store by this rule.
    pub fn captured(self) -> u16 {
        match self {
            Resolution::EvenCapture { stones, .. } | Resolution::OppositeCapture { stones, .. } => {
                stones
            }
            Resolution::LoneStoneBanked { .. } => 1,
            Resolution::ExtraTurn | Resolution::Nothing => 0,
        }
    }
}

/// Index of the pit sharing the same distance from its store on the other row.
#[inline]
pub fn opposite_pit(index: usize) -> usize {
    LAST_PIT - index
}

/// Apply the post-sowing rules to `board`, given where the last stone landed.
pub fn resolve(board: &Board, landing: Slot, mover: Side, rules: &RuleConfig) -> (Board, Resolution) {
    let mut next = *board;
    let resolution = match landing {
        Slot::Store(side) if side == mover => Resolution::ExtraTurn,
        // Sowing never deposits in the opponent's store.
        Slot::Store(_) => Resolution::Nothing,
        Slot::Pit(side, pit) if side != mover => {
            let stones = next.pit(side, pit);
            if rules.opponent_even_capture && stones > 0 && stones % 2 == 0 {
                next.pits_mut(side)[pit] = 0;
                bank(&mut next, mover, stones);
                Resolution::EvenCapture { pit, stones }
            } else {
                Resolution::Nothing
            }
        }
        Slot::Pit(_, pit) => {
            if next.pit(mover, pit) != 1 {
                Resolution::Nothing
            } else {
                let opponent = mover.opponent();
                let opposite = opposite_pit(pit);
                let across = next.pit(opponent, opposite);
                if across > 0 {
                    let stones = across.saturating_add(1);
                    next.pits_mut(mover)[pit] = 0;
                    next.pits_mut(opponent)[opposite] = 0;
                    bank(&mut next, mover, stones);
                    Resolution::OppositeCapture {
                        pit,
                        opposite,
                        stones,
                    }
                } else if rules.capture_lone_stone {
                    next.pits_mut(mover)[pit] = 0;
                    bank(&mut next, mover, 1);
                    Resolution::LoneStoneBanked { pit }
                } else {
                    Resolution::Nothing
                }
            }
        }
    };
    log::trace!("{mover} landed on {landing:?}: {resolution:?}");
    (next, resolution)
}

fn bank(board: &mut Board, side: Side, stones: u16) {
    let store = board.store_mut(side);
    *store = store.saturating_add(stones);
}
