//! Discrete grid coordinate.

use std::fmt;

/// A cell on the simulation grid, `0 <= x < width`, `0 <= y < height`.
///
/// Bounds are owned by the grid; a `Cell` on its own is just a pair.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: u32,
    pub y: u32,
}

impl Cell {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Number of king moves between two cells; the shortest route length on
    /// an empty 8-connected grid.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Taxicab distance.  Used as the pathfinder heuristic.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// `true` if `other` is one of the eight cells around `self`.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self != other && self.chebyshev(other) == 1
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
