use aoc_support::{Coord, Direction, parse_digit_grid, walk};
use std::collections::HashMap;

fn visible_from_outside(grid: &HashMap<Coord, u8>, pos: Coord, height: u8) -> bool {
    Direction::ALL
        .into_iter()
        .any(|d| walk(grid, pos, d).all(|(_, &h)| h < height))
}

/// Trees seen before the view is blocked, the blocking tree included
fn viewing_distance(grid: &HashMap<Coord, u8>, pos: Coord, height: u8, d: Direction) -> usize {
    let mut seen = 0;
    for (_, &h) in walk(grid, pos, d) {
        seen += 1;
        if h >= height {
            break;
        }
    }
    seen
}

pub fn part1(input: &str) -> anyhow::Result<String> {
    let grid = parse_digit_grid(input)?;
    let visible = grid
        .iter()
        .filter(|&(&pos, &height)| visible_from_outside(&grid, pos, height))
        .count();
    Ok(visible.to_string())
}

pub fn part2(input: &str) -> anyhow::Result<String> {
    let grid = parse_digit_grid(input)?;
    let best = grid
        .iter()
        .map(|(&pos, &height)| {
            Direction::ALL
                .into_iter()
                .map(|d| viewing_distance(&grid, pos, height, d))
                .product::<usize>()
        })
        .max()
        .unwrap_or(0);
    Ok(best.to_string())
}
