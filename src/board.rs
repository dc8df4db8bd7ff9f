//! Board representation: two rows of pits and two stores.
//!
//! A [`Board`] is a small `Copy` value. Every engine step takes a board by
//! reference and returns a new one, so search branches never share state.

use std::fmt;

use crate::constants::{PITS, STONES_PER_PIT};

/// One of the two players.
///
/// Side A is player 1 (moves first, bottom row). Side B is player 2 and is
/// the maximizing side for the evaluator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Get the other side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// A slot a stone can be sown into.
///
/// Used to report where the last stone of a sowing landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Pit `index` on the row of `Side`.
    Pit(Side, usize),
    /// The store belonging to `Side`.
    Store(Side),
}

impl Slot {
    /// The slot after this one in counter-clockwise order.
    ///
    /// Own pits low to high, own store, then the other row. Stores are
    /// included; callers decide whether a store is skipped.
    #[inline]
    pub fn next(self) -> Slot {
        match self {
            Slot::Pit(side, i) if i + 1 < PITS => Slot::Pit(side, i + 1),
            Slot::Pit(side, _) => Slot::Store(side),
            Slot::Store(side) => Slot::Pit(side.opponent(), 0),
        }
    }
}

/// Pit counts for both rows plus both stores.
///
/// Index 0 of a row is farthest from its owner's store, index 5 is nearest.
///
/// Slots hold `u16` counts while [`Board::from_parts`] takes `u8` ones, so
/// even a board built from 14 full slots (3570 stones) cannot overflow a
/// slot however the stones are moved around.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pits: [[u16; PITS]; 2],
    stores: [u16; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening layout: four stones in every pit, empty stores.
    pub fn new() -> Self {
        Self {
            pits: [[STONES_PER_PIT; PITS]; 2],
            stores: [0, 0],
        }
    }

    /// Build an arbitrary board.
    pub fn from_parts(side_a: [u8; PITS], side_b: [u8; PITS], store_a: u8, store_b: u8) -> Self {
        Self {
            pits: [side_a.map(u16::from), side_b.map(u16::from)],
            stores: [u16::from(store_a), u16::from(store_b)],
        }
    }

    /// All pits of one side.
    #[inline]
    pub fn pits(&self, side: Side) -> &[u16; PITS] {
        &self.pits[side.index()]
    }

    #[inline]
    pub(crate) fn pits_mut(&mut self, side: Side) -> &mut [u16; PITS] {
        &mut self.pits[side.index()]
    }

    /// Stones in pit `index` of `side`. Panics if `index >= PITS`.
    #[inline]
    pub fn pit(&self, side: Side, index: usize) -> u16 {
        self.pits[side.index()][index]
    }

    /// Stones banked in the store of `side`.
    #[inline]
    pub fn store(&self, side: Side) -> u16 {
        self.stores[side.index()]
    }

    #[inline]
    pub(crate) fn store_mut(&mut self, side: Side) -> &mut u16 {
        &mut self.stores[side.index()]
    }

    /// Stones currently in a slot.
    #[inline]
    pub fn get(&self, slot: Slot) -> u16 {
        match slot {
            Slot::Pit(side, i) => self.pit(side, i),
            Slot::Store(side) => self.store(side),
        }
    }

    /// Stones left on one row.
    #[inline]
    pub fn row_total(&self, side: Side) -> u32 {
        self.pits(side).iter().map(|&n| u32::from(n)).sum()
    }

    /// Whether every pit of `side` is empty.
    #[inline]
    pub fn row_is_empty(&self, side: Side) -> bool {
        self.pits(side).iter().all(|&n| n == 0)
    }

    /// Every stone on the board, pits and stores combined.
    #[inline]
    pub fn total_stones(&self) -> u32 {
        self.row_total(Side::A)
            + self.row_total(Side::B)
            + u32::from(self.store(Side::A))
            + u32::from(self.store(Side::B))
    }

    /// Pits `side` may legally sow from, in ascending index order.
    pub fn legal_moves(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.pits(side)
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Board {
    /// Side B's row is drawn on top, right to left, so both rows run
    /// counter-clockwise. Store B sits on the left, store A on the right.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "     ")?;
        for n in self.pits(Side::B).iter().rev() {
            write!(f, "{n:>3}")?;
        }
        writeln!(f)?;
        write!(f, "{:>3}  ", self.store(Side::B))?;
        write!(f, "{}", " ".repeat(3 * PITS))?;
        writeln!(f, "  {:<3}", self.store(Side::A))?;
        write!(f, "     ")?;
        for n in self.pits(Side::A) {
            write!(f, "{n:>3}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOTAL_STONES;

    #[test]
    fn test_new_board_layout() {
        let board = Board::new();
        assert_eq!(board.pits(Side::A), &[4; PITS]);
        assert_eq!(board.pits(Side::B), &[4; PITS]);
        assert_eq!(board.store(Side::A), 0);
        assert_eq!(board.store(Side::B), 0);
        assert_eq!(board.total_stones(), TOTAL_STONES);
    }

    #[test]
    fn test_slot_walk_wraps_through_store() {
        assert_eq!(Slot::Pit(Side::A, 4).next(), Slot::Pit(Side::A, 5));
        assert_eq!(Slot::Pit(Side::A, 5).next(), Slot::Store(Side::A));
        assert_eq!(Slot::Store(Side::A).next(), Slot::Pit(Side::B, 0));
        assert_eq!(Slot::Store(Side::B).next(), Slot::Pit(Side::A, 0));
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let board = Board::from_parts([0, 3, 0, 0, 1, 0], [1; PITS], 0, 0);
        let moves: Vec<usize> = board.legal_moves(Side::A).collect();
        assert_eq!(moves, vec![1, 4]);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::A.opponent(), Side::B);
        assert_eq!(Side::B.opponent(), Side::A);
    }

    #[test]
    fn test_from_parts_holds_full_slots() {
        let board = Board::from_parts([u8::MAX; PITS], [u8::MAX; PITS], u8::MAX, u8::MAX);
        assert_eq!(board.total_stones(), 14 * 255);
        assert_eq!(board.get(Slot::Store(Side::B)), 255);
        assert_eq!(board.get(Slot::Pit(Side::A, 3)), 255);
    }

    #[test]
    fn test_display_has_three_lines() {
        let text = Board::new().to_string();
        assert_eq!(text.lines().count(), 3);
    }
}
