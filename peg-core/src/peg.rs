//! Hole coordinates, triangular numbering and the `Peg` value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Text shown for an empty hole.
pub const EMPTY_HOLE: &str = "X";

/// The six jump vectors `(Δrow, Δindex)` on the triangular lattice.
///
/// Ordered so that `coord + v` walks source holes in ascending peg number.
pub const JUMPS: [(isize, isize); 6] = [(-2, -2), (-2, 0), (0, -2), (0, 2), (2, 0), (2, 2)];

/// Highest peg number in a triangle of `rows` rows (the triangular number).
#[inline]
pub const fn last_peg_number(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

/// 1-based peg number of the hole at 0-based `(row, index)`.
///
/// Equal to `last_peg_number(row + 1) - (row - index)`; `index` must not exceed `row`.
#[inline]
pub const fn peg_number(row: usize, index: usize) -> usize {
    last_peg_number(row) + index + 1
}

/// Inverse of [`peg_number`] for a board of `height` rows.
///
/// Returns `None` for peg 0 and for numbers past the last hole of the board.
pub fn locate_peg(number: usize, height: usize) -> Option<Coord> {
    if number == 0 {
        return None;
    }
    (0..height)
        .find(|&row| number <= last_peg_number(row + 1))
        .map(|row| Coord::new(row, number - last_peg_number(row) - 1))
}

/// Position of a hole: 0-based row from the apex, 0-based index within the row.
///
/// Orders by row first, then by index, which is also peg number order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub index: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, index: usize) -> Coord {
        Coord { row, index }
    }

    /// Locate a peg number on a board of `height` rows.
    #[inline]
    pub fn from_number(number: usize, height: usize) -> Option<Coord> {
        locate_peg(number, height)
    }

    /// The 1-based peg number of this hole.
    #[inline]
    pub const fn number(self) -> usize {
        peg_number(self.row, self.index)
    }

    /// Check that the hole exists on a board of `height` rows.
    #[inline]
    pub const fn is_valid(self, height: usize) -> bool {
        self.row < height && self.index <= self.row
    }

    /// First hole of its row.
    #[inline]
    pub const fn at_begin(self) -> bool {
        self.index == 0
    }

    /// Last hole of its row.
    #[inline]
    pub const fn at_end(self) -> bool {
        self.index == self.row
    }

    /// Centre hole of an odd-length row (rows 0, 2, 4, ...).
    #[inline]
    pub const fn at_middle(self) -> bool {
        self.row % 2 == 0 && self.index == self.row / 2
    }

    /// Shift by `(dr, di)`, staying inside the (unbounded) triangle.
    ///
    /// The board height is not checked here.
    pub fn offset(self, dr: isize, di: isize) -> Option<Coord> {
        let row = self.row.checked_add_signed(dr)?;
        let index = self.index.checked_add_signed(di)?;
        (index <= row).then_some(Coord { row, index })
    }

    /// The hole jumped over when moving from `self` to `to`.
    ///
    /// `None` unless the displacement is one of the six [`JUMPS`].
    pub fn jump_middle(self, to: Coord) -> Option<Coord> {
        let dr = to.row as isize - self.row as isize;
        let di = to.index as isize - self.index as isize;
        if !JUMPS.contains(&(dr, di)) {
            return None;
        }
        self.offset(dr / 2, di / 2)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.index)
    }
}

/// One hole of the board and whether its peg is still in place.
///
/// Identity is the position: equality, ordering and hashing ignore `removed`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Peg {
    number: usize,
    coord: Coord,
    removed: bool,
}

impl Peg {
    /// Create a present peg at `coord`, deriving its number.
    #[inline]
    pub fn at(coord: Coord) -> Peg {
        Peg {
            number: coord.number(),
            coord,
            removed: false,
        }
    }

    /// Create a present peg from its number on a board of `height` rows.
    pub fn from_number(number: usize, height: usize) -> Option<Peg> {
        locate_peg(number, height).map(Peg::at)
    }

    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.coord.row
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.coord.index
    }

    #[inline]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    #[inline]
    pub fn at_begin(&self) -> bool {
        self.coord.at_begin()
    }

    #[inline]
    pub fn at_end(&self) -> bool {
        self.coord.at_end()
    }

    #[inline]
    pub fn at_middle(&self) -> bool {
        self.coord.at_middle()
    }

    /// Take the peg out of its hole. Returns false if the hole is already empty.
    pub fn remove(&mut self) -> bool {
        if self.removed {
            return false;
        }
        self.removed = true;
        true
    }

    /// Put the peg back. Returns false if it was never taken out.
    pub fn replace(&mut self) -> bool {
        if !self.removed {
            return false;
        }
        self.removed = false;
        true
    }
}

impl PartialEq for Peg {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Peg {}

impl Hash for Peg {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

impl PartialOrd for Peg {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Peg {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coord.cmp(&other.coord)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.removed {
            f.pad(EMPTY_HOLE)
        } else {
            f.pad(&self.number.to_string())
        }
    }
}
