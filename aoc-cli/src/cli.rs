//! CLI argument parsing using clap

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Advent of Code helper: fetch inputs, start new days, run solutions
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Advent of Code puzzle helper", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the puzzle input into input.txt
    Download(DownloadArgs),
    /// Create the next day directory from the template
    NewDay(NewDayArgs),
    /// Run a puzzle part and print its answer
    Solve(SolveArgs),
}

#[derive(ClapArgs, Debug)]
pub struct DownloadArgs {
    /// Year to fetch (inferred from an `aoc<YYYY>` parent directory if omitted,
    /// otherwise the year of the bundled solutions)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to fetch (inferred from a `day<NN>` directory if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Directory to write input.txt into, also used to infer year and day
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// File holding the session cookie (searched upward for `.env` if omitted)
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Number of download attempts before giving up
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempts: u32,

    /// Seconds to wait between attempts
    #[arg(long, default_value = "1", value_parser = parse_seconds)]
    pub backoff: Duration,
}

#[derive(ClapArgs, Debug)]
pub struct NewDayArgs {
    /// Directory holding the `day*` folders
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Template directory copied for each new day
    #[arg(long, default_value = "day00")]
    pub template: String,

    /// File inside the new day whose template marker is rewritten
    #[arg(long, default_value = "src/part1.rs")]
    pub entry_file: PathBuf,

    /// Directory of run configurations that mention the current day
    #[arg(long, default_value = ".run")]
    pub run_configs: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct SolveArgs {
    /// Puzzle day
    #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Input file (defaults to `day<NN>/input.txt` under --root)
    pub input: Option<PathBuf>,

    /// Directory holding the `day*` folders
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

fn parse_seconds(s: &str) -> Result<Duration, String> {
    s.parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(Duration::from_secs_f64)
        .ok_or_else(|| format!("invalid number of seconds: {}", s))
}
