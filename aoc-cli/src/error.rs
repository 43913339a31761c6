//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Year or day could not be inferred from the working directory
    #[error("Unexpected working dir: {} (expected .../aoc<YYYY>/day<NN>)", .0.display())]
    WorkDir(PathBuf),

    /// Input file error
    #[error("Input error: {0}")]
    Input(#[from] InputStoreError),

    /// Reading puzzle input failed
    #[error("{0}")]
    Read(#[from] aoc_support::InputError),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Scaffolding a new day failed
    #[error("Scaffold error: {0}")]
    Scaffold(#[from] ScaffoldError),

    /// No solution registered for the requested day and part
    #[error("No solution for day {day} part {part}")]
    UnknownPuzzle { day: u8, part: u8 },

    /// The solution itself failed
    #[error("Day {day} part {part} failed: {message}")]
    Solve { day: u8, part: u8, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors while reading or writing a day's input file
#[derive(Error, Debug)]
pub enum InputStoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Day directory creation failed
    #[error("Directory creation failed: {0}")]
    DirCreation(String),
}

/// Errors while creating a new day from the template
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No `day*` directory to continue from
    #[error("No day directories found in {}", .0.display())]
    NoDays(PathBuf),

    /// The last day's name has no number in it
    #[error("Cannot find a day number in {0:?}")]
    NoDayNumber(String),

    /// The template directory does not exist
    #[error("Template directory {} does not exist", .0.display())]
    MissingTemplate(PathBuf),

    /// The template lacks the file whose marker gets rewritten
    #[error("Template entry file {} does not exist", .0.display())]
    MissingEntryFile(PathBuf),

    /// The new day directory is already there
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// IO error at a specific path
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
