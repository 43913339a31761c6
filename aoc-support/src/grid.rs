//! Parsing text grids into coordinate-keyed collections

use crate::coord::Coord;
use crate::direction::Direction;
use crate::error::ParseError;
use std::collections::{HashMap, HashSet};

/// Iterate `(coord, char)` over every character of every line.
///
/// Row 0 is the first line and column 0 its first character. A trailing
/// newline does not produce an extra row.
fn cells(text: &str) -> impl Iterator<Item = (Coord, char)> + '_ {
    text.lines().enumerate().flat_map(|(y, line)| {
        line.chars()
            .enumerate()
            .map(move |(x, c)| (Coord::new(x as i64, y as i64), c))
    })
}

/// Parse a grid of decimal digits.
///
/// # Errors
///
/// Returns [`ParseError::InvalidDigit`] for the first character that is not
/// `0`-`9`.
///
/// # Example
///
/// ```
/// use aoc_support::{Coord, parse_digit_grid};
///
/// let grid = parse_digit_grid("12\n34\n").unwrap();
/// assert_eq!(grid[&Coord::new(1, 1)], 4);
/// ```
pub fn parse_digit_grid(text: &str) -> Result<HashMap<Coord, u8>, ParseError> {
    cells(text)
        .map(|(coord, c)| {
            c.to_digit(10)
                .map(|d| (coord, d as u8))
                .ok_or(ParseError::InvalidDigit {
                    row: coord.y as usize,
                    column: coord.x as usize,
                    found: c,
                })
        })
        .collect()
}

/// Coordinates whose character equals `marker`; everything else is ignored.
pub fn parse_marker_grid(text: &str, marker: char) -> HashSet<Coord> {
    cells(text)
        .filter(|&(_, c)| c == marker)
        .map(|(coord, _)| coord)
        .collect()
}

/// Every character keyed by its coordinate
pub fn parse_char_grid(text: &str) -> HashMap<Coord, char> {
    cells(text).collect()
}

/// Cells met when moving from `start` in `direction`, nearest first.
///
/// `start` itself is not yielded. The walk ends at the first coordinate
/// missing from `grid`.
pub fn walk<T>(
    grid: &HashMap<Coord, T>,
    start: Coord,
    direction: Direction,
) -> impl Iterator<Item = (Coord, &T)> + '_ {
    let mut current = start;
    std::iter::from_fn(move || {
        current = direction.step(current, 1);
        grid.get(&current).map(|value| (current, value))
    })
}

/// The four orthogonal neighbours in [`Direction::ALL`] order
pub fn adjacent_4(coord: Coord) -> impl Iterator<Item = Coord> {
    Direction::ALL.into_iter().map(move |d| d.step(coord, 1))
}

/// All eight neighbours, row by row from the top left
pub fn adjacent_8(coord: Coord) -> impl Iterator<Item = Coord> {
    (-1..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
        .filter(|&(dx, dy)| (dx, dy) != (0, 0))
        .map(move |(dx, dy)| Coord::new(coord.x + dx, coord.y + dy))
}
