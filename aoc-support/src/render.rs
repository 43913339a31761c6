//! Rendering coordinate sets back to text, mostly for eyeballing puzzle state

use crate::coord::Coord;
use crate::error::ParseError;
use itertools::{Itertools, MinMaxResult};
use std::collections::HashSet;

fn bounds(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    match values.minmax() {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Draw `coords` inside their bounding box.
///
/// Occupied cells get `marker`, the rest `background`. Rows are joined with
/// `\n` and there is no trailing newline.
///
/// # Errors
///
/// [`ParseError::EmptyCoordinates`] when `coords` is empty, since there is no
/// bounding box to draw.
///
/// # Example
///
/// ```
/// use aoc_support::{Coord, render_marker_grid};
/// use std::collections::HashSet;
///
/// let coords = HashSet::from([Coord::new(0, 0), Coord::new(2, 1)]);
/// assert_eq!(render_marker_grid(&coords, '#', '.').unwrap(), "#..\n..#");
/// ```
pub fn render_marker_grid(
    coords: &HashSet<Coord>,
    marker: char,
    background: char,
) -> Result<String, ParseError> {
    let (min_x, max_x) = bounds(coords.iter().map(|c| c.x)).ok_or(ParseError::EmptyCoordinates)?;
    let (min_y, max_y) = bounds(coords.iter().map(|c| c.y)).ok_or(ParseError::EmptyCoordinates)?;

    Ok((min_y..=max_y)
        .map(|y| {
            (min_x..=max_x)
                .map(|x| {
                    if coords.contains(&Coord::new(x, y)) {
                        marker
                    } else {
                        background
                    }
                })
                .collect::<String>()
        })
        .join("\n"))
}
