//! Advent of Code puzzle solutions
//!
//! Each day is an independent module exposing `part1`/`part2` functions that
//! take the raw puzzle text and return the answer as a string. The
//! [`PUZZLES`] table lets a runner look a solution up by day and part.

pub mod year_2022;

/// Signature shared by every puzzle part
pub type SolveFn = fn(&str) -> anyhow::Result<String>;

/// The event year these solutions belong to
pub const YEAR: u16 = 2022;

/// A solvable puzzle part
#[derive(Debug, Clone, Copy)]
pub struct Puzzle {
    pub day: u8,
    pub part: u8,
    pub title: &'static str,
    pub solve: SolveFn,
}

/// All available puzzle parts, ordered by day then part
pub static PUZZLES: &[Puzzle] = &[
    Puzzle { day: 8, part: 1, title: "Treetop Tree House", solve: year_2022::day_8::part1 },
    Puzzle { day: 8, part: 2, title: "Treetop Tree House", solve: year_2022::day_8::part2 },
    Puzzle { day: 9, part: 1, title: "Rope Bridge", solve: year_2022::day_9::part1 },
    Puzzle { day: 9, part: 2, title: "Rope Bridge", solve: year_2022::day_9::part2 },
    Puzzle { day: 12, part: 1, title: "Hill Climbing Algorithm", solve: year_2022::day_12::part1 },
    Puzzle { day: 14, part: 2, title: "Regolith Reservoir", solve: year_2022::day_14::part2 },
];

/// Look up a puzzle part
pub fn find(day: u8, part: u8) -> Option<&'static Puzzle> {
    PUZZLES.iter().find(|p| p.day == day && p.part == part)
}
