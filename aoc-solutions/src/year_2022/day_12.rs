use anyhow::anyhow;
use aoc_support::{Coord, adjacent_4, parse_char_grid};
use std::collections::{HashMap, VecDeque};

struct HeightMap {
    start: Coord,
    end: Coord,
    heights: HashMap<Coord, u8>,
}

fn parse(input: &str) -> anyhow::Result<HeightMap> {
    let mut start = None;
    let mut end = None;
    let mut heights = HashMap::new();

    for (coord, c) in parse_char_grid(input) {
        let height = match c {
            'S' => {
                start = Some(coord);
                b'a'
            }
            'E' => {
                end = Some(coord);
                b'z'
            }
            'a'..='z' => c as u8,
            other => return Err(anyhow!("unexpected {:?} at {}", other, coord)),
        };
        heights.insert(coord, height);
    }

    Ok(HeightMap {
        start: start.ok_or_else(|| anyhow!("no start marker 'S'"))?,
        end: end.ok_or_else(|| anyhow!("no end marker 'E'"))?,
        heights,
    })
}

/// Fewest steps from start to end climbing at most one level per step
pub fn part1(input: &str) -> anyhow::Result<String> {
    let map = parse(input)?;
    let mut steps = HashMap::from([(map.start, 0usize)]);
    let mut queue = VecDeque::from([map.start]);

    while let Some(pos) = queue.pop_front() {
        let here = steps[&pos];
        if pos == map.end {
            return Ok(here.to_string());
        }
        let height = map.heights[&pos];
        for next in adjacent_4(pos) {
            let Some(&next_height) = map.heights.get(&next) else {
                continue;
            };
            if next_height <= height + 1 && !steps.contains_key(&next) {
                steps.insert(next, here + 1);
                queue.push_back(next);
            }
        }
    }

    Err(anyhow!("end is unreachable"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn test_part1() {
        assert_eq!(part1(EXAMPLE).unwrap(), "31");
    }

    #[test]
    fn test_unreachable_end() {
        assert!(part1("SaE\n").is_err());
    }

    #[test]
    fn test_missing_markers() {
        assert!(part1("abc\n").is_err());
    }
}
