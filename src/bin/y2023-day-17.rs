//! Crucible routing: find the least total heat loss from the top-left city
//! block to the bottom-right, never moving more than three blocks in a
//! straight line.

use advent_of_code::input;
use failure::{bail, format_err, Error};
use std::collections::{BinaryHeap, HashMap};
use std::cmp::Reverse;

type Position = (i64, i64); // (row, column)
type Direction = (i64, i64);

fn parse(text: &str) -> Result<Vec<Vec<u32>>, Error> {
    text.lines()
        .map(|line| {
            line.chars()
                .map(|c| {
                    c.to_digit(10)
                        .ok_or_else(|| format_err!("bad heat loss digit {:?}", c))
                })
                .collect()
        })
        .collect()
}

/// Dijkstra over (position, direction, straight-run length) states. The run
/// length is part of the state because a crucible arriving somewhere after
/// three straight blocks has fewer moves open to it than one that just
/// turned.
fn least_heat(grid: &[Vec<u32>]) -> Result<u32, Error> {
    let height = grid.len() as i64;
    let width = grid.first().map_or(0, |row| row.len()) as i64;
    let goal = (height - 1, width - 1);

    let mut best: HashMap<(Position, Direction, u8), u32> = HashMap::new();
    let mut heap = BinaryHeap::new();
    // The start has no direction of travel yet; (0, 0) matches nothing.
    heap.push((Reverse(0), (0, 0), (0, 0), 0u8));

    while let Some((Reverse(heat), position, direction, run)) = heap.pop() {
        if position == goal {
            return Ok(heat);
        }
        if best
            .get(&(position, direction, run))
            .map_or(false, |&b| b < heat)
        {
            continue;
        }
        for &turn in &[(-1, 0), (1, 0), (0, -1), (0, 1)] {
            // Crucibles cannot reverse.
            if turn == (-direction.0, -direction.1) && direction != (0, 0) {
                continue;
            }
            let next_run = if turn == direction { run + 1 } else { 1 };
            if next_run > 3 {
                continue;
            }
            let next = (position.0 + turn.0, position.1 + turn.1);
            if next.0 < 0 || next.0 >= height || next.1 < 0 || next.1 >= width {
                continue;
            }
            let next_heat = heat + grid[next.0 as usize][next.1 as usize];
            let key = (next, turn, next_run);
            if best.get(&key).map_or(true, |&b| b > next_heat) {
                best.insert(key, next_heat);
                heap.push((Reverse(next_heat), next, turn, next_run));
            }
        }
    }
    bail!("the goal is unreachable");
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-17.txt")?;
    let grid = parse(&text)?;
    println!("{}", least_heat(&grid)?);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    #[test]
    fn published_city() {
        let grid = parse(EXAMPLE).unwrap();
        assert_eq!(least_heat(&grid).unwrap(), 102);
    }

    #[test]
    fn tiny_city() {
        let grid = parse("11\n11\n").unwrap();
        assert_eq!(least_heat(&grid).unwrap(), 2);
    }

    // Crossing a single row takes four straight moves, one over the cap,
    // and there is no room to jog.
    #[test]
    fn straight_runs_are_capped() {
        let grid = parse("11111\n").unwrap();
        assert!(least_heat(&grid).is_err());
    }

    #[test]
    fn rejects_non_digit_blocks() {
        assert!(parse("12x\n").is_err());
    }
}
