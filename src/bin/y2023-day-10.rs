//! Pipe maze: one closed loop of pipe runs through the field; find how far
//! around the loop the farthest tile is from the start.

use advent_of_code::input;
use failure::{err_msg, format_err, Error};

type Position = (usize, usize); // (row, column)

/// The two (row, column) offsets a pipe tile connects.
fn pipe_ends(tile: u8) -> Option<[(i64, i64); 2]> {
    match tile {
        b'|' => Some([(-1, 0), (1, 0)]),
        b'-' => Some([(0, -1), (0, 1)]),
        b'L' => Some([(-1, 0), (0, 1)]),
        b'J' => Some([(-1, 0), (0, -1)]),
        b'7' => Some([(1, 0), (0, -1)]),
        b'F' => Some([(1, 0), (0, 1)]),
        _ => None,
    }
}

struct Field {
    grid: Vec<Vec<u8>>,
    start: Position,
}

impl Field {
    fn tile(&self, position: Position) -> u8 {
        self.grid[position.0][position.1]
    }

    fn offset(&self, position: Position, delta: (i64, i64)) -> Option<Position> {
        let row = position.0 as i64 + delta.0;
        let column = position.1 as i64 + delta.1;
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.grid.len() || column >= self.grid[row].len() {
            return None;
        }
        Some((row, column))
    }
}

fn parse(text: &str) -> Result<Field, Error> {
    let grid: Vec<Vec<u8>> = text.lines().map(|line| line.as_bytes().to_vec()).collect();
    let start = grid
        .iter()
        .enumerate()
        .find_map(|(r, row)| row.iter().position(|&t| t == b'S').map(|c| (r, c)))
        .ok_or_else(|| err_msg("no start tile"))?;
    Ok(Field { grid, start })
}

/// Walk the loop from the start back to the start. Every pipe has exactly
/// two ends, so at each tile the way forward is whichever end is not the
/// tile we came from. The farthest tile is half the loop's length away.
fn farthest_distance(field: &Field) -> Result<usize, Error> {
    // Either pipe adjacent to the start that connects back to it will do;
    // the loop reads the same in both directions.
    let mut previous = field.start;
    let mut current = [(-1, 0), (1, 0), (0, -1), (0, 1)]
        .iter()
        .filter_map(|&delta| field.offset(field.start, delta))
        .find(|&neighbor| {
            pipe_ends(field.tile(neighbor))
                .map(|ends| {
                    ends.iter()
                        .any(|&end| field.offset(neighbor, end) == Some(field.start))
                })
                .unwrap_or(false)
        })
        .ok_or_else(|| err_msg("no pipe connects to the start"))?;

    let mut length = 1;
    while current != field.start {
        let ends = pipe_ends(field.tile(current))
            .ok_or_else(|| format_err!("the path leaves the loop at {:?}", current))?;
        let next = ends
            .iter()
            .filter_map(|&end| field.offset(current, end))
            .find(|&position| position != previous)
            .ok_or_else(|| format_err!("dead end at {:?}", current))?;
        previous = current;
        current = next;
        length += 1;
    }
    Ok(length / 2)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-10.txt")?;
    let field = parse(&text)?;
    println!("{}", farthest_distance(&field)?);
    Ok(())
}
