//! The four orthogonal directions and their rotations

use crate::coord::Coord;
use crate::error::ParseError;
use std::str::FromStr;

/// One of the four orthogonal movement directions.
///
/// The variants are declared in clockwise order, so rotating is index
/// arithmetic modulo 4. Row numbers grow downward: [`Direction::Up`] moves to
/// a smaller `y`.
///
/// # Example
///
/// ```
/// use aoc_support::Direction;
///
/// let d = Direction::Up;
/// assert_eq!(d.clockwise(), Direction::Right);
/// assert_eq!(d.opposite(), Direction::Down);
/// assert_eq!(d.apply(3, 3, 2), (3, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in clockwise order, starting at [`Direction::Up`]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    const fn index(self) -> usize {
        self as usize
    }

    const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Unit displacement `(dx, dy)` of one step
    pub const fn displacement(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Move `(x, y)` by `n` steps; a negative `n` moves backward.
    ///
    /// No bounds are checked, callers decide what leaving their grid means.
    ///
    /// Plain `i64` arithmetic: a result outside the `i64` range panics in
    /// debug builds and wraps in release builds.
    pub const fn apply(self, x: i64, y: i64, n: i64) -> (i64, i64) {
        let (dx, dy) = self.displacement();
        (x + dx * n, y + dy * n)
    }

    /// [`Direction::apply`] on a [`Coord`], with the same overflow behaviour
    pub const fn step(self, coord: Coord, n: i64) -> Coord {
        let (x, y) = self.apply(coord.x, coord.y, n);
        Coord::new(x, y)
    }

    /// Quarter turn to the right
    pub const fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Quarter turn to the left
    pub const fn counterclockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Half turn, same as two clockwise turns
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts the single letters `U`, `R`, `D`, `L` or the full names,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "U" | "UP" => Ok(Direction::Up),
            "R" | "RIGHT" => Ok(Direction::Right),
            "D" | "DOWN" => Ok(Direction::Down),
            "L" | "LEFT" => Ok(Direction::Left),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}
