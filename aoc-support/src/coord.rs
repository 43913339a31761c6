//! Integer grid coordinates

use std::fmt;

/// A cell on an unbounded integer grid.
///
/// `x` is the column and `y` the row; rows grow downward, matching the order
/// in which puzzle text is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    /// Create a coordinate from its column and row
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance, the number of king moves between two cells
    pub fn chebyshev(self, other: Coord) -> i64 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Manhattan distance
    pub fn manhattan(self, other: Coord) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (i64, i64) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
