//! AOC CLI - download inputs, scaffold new days and run puzzle solutions

mod cache;
mod cli;
mod config;
mod error;
mod output;
mod scaffold;

use aoc_http_client::{AocClient, RetryPolicy};
use cache::InputStore;
use clap::Parser;
use cli::{Args, Command, DownloadArgs, NewDayArgs, SolveArgs};
use error::CliError;
use scaffold::Scaffold;

/// Width of the rule printed around scaffold output
const BANNER_WIDTH: usize = 40;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Download(args) => download(args),
        Command::NewDay(args) => new_day(args),
        Command::Solve(args) => solve(args),
    }
}

/// Fetch the input for a day and write it next to the solution
fn download(args: DownloadArgs) -> Result<(), CliError> {
    let dir = config::resolve_dir(&args.dir)?;
    let (year, day) = config::resolve_year_day(args.year, args.day, &dir, aoc_solutions::YEAR)?;
    let session = config::resolve_session(args.env_file.as_deref(), &dir)?;

    let client = AocClient::builder()
        .retry_policy(RetryPolicy {
            attempts: args.attempts,
            backoff: args.backoff,
        })
        .build()?;

    println!("Downloading input for {} day {}...", year, day);
    let input = client.fetch_input(year, day, &session)?;
    let store = InputStore::new(&dir);
    if store.contains() {
        tracing::info!(path = %store.path().display(), "replacing existing input");
    }
    let path = store.put(&input)?;

    println!("Saved {} bytes to {}", input.len(), path.display());
    println!("{}", output::input_preview(&input));
    Ok(())
}

/// Copy the template into the next day directory
fn new_day(args: NewDayArgs) -> Result<(), CliError> {
    let scaffold = Scaffold {
        root: args.root,
        template: args.template,
        entry_file: args.entry_file,
        run_configs: args.run_configs,
    };

    println!("{}", output::banner(" Creating new advent day ", BANNER_WIDTH));
    let created = scaffold.create_next()?;
    println!("Last day is {}.", created.last_day);
    println!("Created {} from {}.", created.path.display(), scaffold.template);
    if created.edited_run_configs.is_empty() {
        println!("No run configurations edited.");
    } else {
        println!("Edited run configurations:");
        for file in &created.edited_run_configs {
            println!(" - {}", file.display());
        }
    }
    println!("{}", output::banner(&format!(" {} ready ", created.name), BANNER_WIDTH));
    Ok(())
}

/// Run one puzzle part and print its answer
fn solve(args: SolveArgs) -> Result<(), CliError> {
    let SolveArgs {
        day,
        part,
        input,
        root,
    } = args;
    let puzzle = aoc_solutions::find(day, part).ok_or(CliError::UnknownPuzzle { day, part })?;

    let path = input.unwrap_or_else(|| InputStore::for_day(&root, day).path());
    let text = aoc_support::read_input(&path)?;
    tracing::debug!(day, part, path = %path.display(), "solving {}", puzzle.title);

    let label = format!("day {} part {}", day, part);
    let answer = aoc_support::timing(Some(&label), || (puzzle.solve)(&text)).map_err(|e| {
        CliError::Solve {
            day,
            part,
            message: format!("{:#}", e),
        }
    })?;

    println!("{}", answer);
    Ok(())
}
