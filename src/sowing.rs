//! Sowing: distributing the stones of one pit around the board.
//!
//! Stones travel counter-clockwise: the mover's pits from low to high index,
//! the mover's store, then the opponent's pits. The opponent's store is
//! passed over without a deposit and without using up a stone.
//!
//! A pit holding more than one stone puts its first stone back into itself.
//! A pit holding a single stone moves it straight to the next slot, since
//! dropping it back where it came from would be a null move.

use crate::board::{Board, Side, Slot};
use crate::constants::PITS;
use crate::error::InvalidMove;

/// Result of sowing one pit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sowing {
    /// Board after every stone has been placed.
    pub board: Board,
    /// Slot that received the last stone.
    pub landing: Slot,
}

/// Sow pit `pit` of `mover`'s row.
///
/// Fails without touching the board if the pit index is out of range or
/// the pit is empty.
pub fn sow(board: &Board, pit: usize, mover: Side) -> Result<Sowing, InvalidMove> {
    if pit >= PITS {
        return Err(InvalidMove::OutOfRange { pit });
    }
    let stones = board.pit(mover, pit);
    if stones == 0 {
        return Err(InvalidMove::EmptyPit { side: mover, pit });
    }
    Ok(sow_unchecked(board, pit, mover))
}

/// Sow a pit already known to be legal. Used on the search hot path.
pub(crate) fn sow_unchecked(board: &Board, pit: usize, mover: Side) -> Sowing {
    let mut next = *board;
    let mut in_hand = next.pit(mover, pit);
    debug_assert!(in_hand > 0, "sowing an empty pit");
    next.pits_mut(mover)[pit] = 0;

    let source = Slot::Pit(mover, pit);
    let mut cursor = if in_hand > 1 { source } else { source.next() };

    let landing = loop {
        let deposited = match cursor {
            Slot::Store(side) if side != mover => false,
            Slot::Store(side) => {
                let store = next.store_mut(side);
                *store = store.saturating_add(1);
                true
            }
            Slot::Pit(side, i) => {
                let count = &mut next.pits_mut(side)[i];
                *count = count.saturating_add(1);
                true
            }
        };
        if deposited {
            in_hand -= 1;
            if in_hand == 0 {
                break cursor;
            }
        }
        cursor = cursor.next();
    };

    Sowing {
        board: next,
        landing,
    }
}
