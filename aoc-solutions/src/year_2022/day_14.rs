use anyhow::anyhow;
use aoc_support::{Coord, Direction, ParseError, extract_integers};
use itertools::Itertools;
use std::collections::HashSet;

const SOURCE: Coord = Coord::new(500, 0);

fn parse_rocks(input: &str) -> anyhow::Result<HashSet<Coord>> {
    let mut rocks = HashSet::new();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let numbers = extract_integers(line)?;
        if numbers.len() % 2 != 0 {
            return Err(ParseError::InvalidFormat(format!("odd number of values in {:?}", line)).into());
        }
        let points: Vec<Coord> = numbers
            .into_iter()
            .tuples::<(i64, i64)>()
            .map(Coord::from)
            .collect();
        for (a, b) in points.into_iter().tuple_windows() {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                for y in a.y.min(b.y)..=a.y.max(b.y) {
                    rocks.insert(Coord::new(x, y));
                }
            }
        }
    }
    Ok(rocks)
}

/// Units of sand that come to rest before the source is buried, with an
/// endless floor two rows below the lowest rock
pub fn part2(input: &str) -> anyhow::Result<String> {
    let mut blocked = parse_rocks(input)?;
    let lowest = blocked
        .iter()
        .map(|c| c.y)
        .max()
        .ok_or_else(|| anyhow!("no rock paths in input"))?;
    let resting_row = lowest + 1;

    let mut units = 0usize;
    while !blocked.contains(&SOURCE) {
        let mut pos = SOURCE;
        loop {
            if pos.y == resting_row {
                break;
            }
            let below = Direction::Down.step(pos, 1);
            let candidates = [
                below,
                Direction::Left.step(below, 1),
                Direction::Right.step(below, 1),
            ];
            match candidates.into_iter().find(|c| !blocked.contains(c)) {
                Some(next) => pos = next,
                None => break,
            }
        }
        blocked.insert(pos);
        units += 1;
    }
    Ok(units.to_string())
}
