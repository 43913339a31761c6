use anyhow::Context;
use aoc_support::{Coord, Direction, ParseError};
use std::collections::HashSet;

fn parse_moves(input: &str) -> anyhow::Result<Vec<(Direction, u32)>> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| -> anyhow::Result<(Direction, u32)> {
            let (letter, amount) = line
                .split_once(' ')
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected '<direction> <steps>'",
                        idx + 1
                    ))
                })?;
            let direction = letter.parse::<Direction>()?;
            let amount = amount
                .parse()
                .with_context(|| format!("(line {}) bad step count {:?}", idx + 1, amount))?;
            Ok((direction, amount))
        })
        .collect()
}

/// Pull `knot` one step toward `leader` unless they already touch
fn follow(knot: Coord, leader: Coord) -> Coord {
    if knot.chebyshev(leader) <= 1 {
        return knot;
    }
    let mut next = knot;
    match (leader.x - knot.x).signum() {
        1 => next = Direction::Right.step(next, 1),
        -1 => next = Direction::Left.step(next, 1),
        _ => {}
    }
    match (leader.y - knot.y).signum() {
        1 => next = Direction::Down.step(next, 1),
        -1 => next = Direction::Up.step(next, 1),
        _ => {}
    }
    next
}

fn tail_positions(input: &str, knots: usize) -> anyhow::Result<usize> {
    let moves = parse_moves(input)?;
    let mut rope = vec![Coord::default(); knots];
    let mut seen = HashSet::from([Coord::default()]);

    for (direction, amount) in moves {
        for _ in 0..amount {
            rope[0] = direction.step(rope[0], 1);
            for i in 1..rope.len() {
                rope[i] = follow(rope[i], rope[i - 1]);
            }
            if let Some(&tail) = rope.last() {
                seen.insert(tail);
            }
        }
    }
    Ok(seen.len())
}

pub fn part1(input: &str) -> anyhow::Result<String> {
    Ok(tail_positions(input, 2)?.to_string())
}

pub fn part2(input: &str) -> anyhow::Result<String> {
    Ok(tail_positions(input, 10)?.to_string())
}
