//! Error types for the support library

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for malformed puzzle text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A digit grid contained something other than `0`-`9`
    #[error("Invalid digit {found:?} at row {row}, column {column}")]
    InvalidDigit {
        /// Zero-based line index
        row: usize,
        /// Zero-based character index within the line
        column: usize,
        /// The offending character
        found: char,
    },
    /// A token in a number list is not a base-10 integer
    #[error("Invalid integer {token:?}: {source}")]
    InvalidInteger {
        /// The token as it appeared in the input
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// Text that does not name one of the four directions
    #[error("Unknown direction: {0:?}")]
    UnknownDirection(String),
    /// Rendering needs at least one coordinate to define a bounding box
    #[error("Cannot render an empty coordinate set")]
    EmptyCoordinates,
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Error type for loading puzzle input from disk
#[derive(Debug, Error)]
pub enum InputError {
    /// The input file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
