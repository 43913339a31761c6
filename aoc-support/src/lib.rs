//! Advent of Code Support Library
//!
//! Small helpers shared by puzzle solutions that work on 2-D text grids.
//!
//! # Overview
//!
//! - [`Coord`] and [`Direction`]: integer grid positions and the four
//!   orthogonal moves, with clockwise/counterclockwise/opposite rotations
//! - Grid parsers: [`parse_digit_grid`], [`parse_marker_grid`],
//!   [`parse_char_grid`], plus [`walk`] and the `adjacent_*` neighbour helpers
//! - Number parsers: [`parse_integers`], [`parse_csv_integers`],
//!   [`extract_integers`]
//! - [`render_marker_grid`] to draw a coordinate set back as text
//! - [`Timer`] / [`timing`] to report how long a block took on stderr
//!
//! # Quick Example
//!
//! ```
//! use aoc_support::{Coord, Direction, parse_digit_grid, walk};
//!
//! let grid = parse_digit_grid("30373\n25512\n").unwrap();
//! let east: Vec<u8> = walk(&grid, Coord::new(0, 0), Direction::Right)
//!     .map(|(_, &h)| h)
//!     .collect();
//! assert_eq!(east, vec![0, 3, 7, 3]);
//! ```

mod coord;
mod direction;
mod error;
mod grid;
mod input;
mod numbers;
mod render;
mod timing;

pub use coord::Coord;
pub use direction::Direction;
pub use error::{InputError, ParseError};
pub use grid::{adjacent_4, adjacent_8, parse_char_grid, parse_digit_grid, parse_marker_grid, walk};
pub use input::{DEFAULT_INPUT, read_input};
pub use numbers::{extract_integers, parse_csv_integers, parse_integers};
pub use render::render_marker_grid;
pub use timing::{Timer, format_elapsed, timing};
