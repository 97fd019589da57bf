//! Beam bouncing: a beam of light enters the contraption, splits and
//! reflects among the mirrors, and energizes every tile it crosses. Count
//! the energized tiles for the given entry, then for the best entry.

use advent_of_code::input;
use failure::Error;

type Direction = (i64, i64); // (row, column) offsets

#[derive(Clone, Copy)]
struct Beam {
    row: i64,
    column: i64,
    direction: Direction,
}

/// One bit per direction, so a tile's visit history fits a u8.
fn direction_bit(direction: Direction) -> u8 {
    match direction {
        (0, 1) => 1,
        (0, -1) => 2,
        (1, 0) => 4,
        (-1, 0) => 8,
        _ => unreachable!("beams only travel along the grid"),
    }
}

struct Contraption {
    grid: Vec<Vec<u8>>,
    height: i64,
    width: i64,
}

impl Contraption {
    fn parse(text: &str) -> Contraption {
        let grid: Vec<Vec<u8>> = text.lines().map(|line| line.as_bytes().to_vec()).collect();
        let height = grid.len() as i64;
        let width = grid.first().map_or(0, |row| row.len()) as i64;
        Contraption {
            grid,
            height,
            width,
        }
    }

    /// Tiles energized by a beam entering at `start`. A beam retracing a
    /// tile in a direction it has already been seen adds nothing, which is
    /// what bounds the simulation despite the splitter loops.
    fn energized(&self, start: Beam) -> usize {
        let mut seen = vec![vec![0u8; self.width as usize]; self.height as usize];
        let mut beams = vec![start];
        while let Some(beam) = beams.pop() {
            if beam.row < 0 || beam.row >= self.height || beam.column < 0 || beam.column >= self.width
            {
                continue;
            }
            let tile_seen = &mut seen[beam.row as usize][beam.column as usize];
            let bit = direction_bit(beam.direction);
            if *tile_seen & bit != 0 {
                continue;
            }
            *tile_seen |= bit;

            let (dr, dc) = beam.direction;
            let outgoing: Vec<Direction> = match self.grid[beam.row as usize][beam.column as usize] {
                b'/' => vec![(-dc, -dr)],
                b'\\' => vec![(dc, dr)],
                b'-' if dr != 0 => vec![(0, -1), (0, 1)],
                b'|' if dc != 0 => vec![(-1, 0), (1, 0)],
                _ => vec![(dr, dc)],
            };
            for direction in outgoing {
                beams.push(Beam {
                    row: beam.row + direction.0,
                    column: beam.column + direction.1,
                    direction,
                });
            }
        }
        seen.iter()
            .flat_map(|row| row.iter())
            .filter(|&&bits| bits != 0)
            .count()
    }

    /// The best count over every beam entering from an edge tile.
    fn best_entry(&self) -> usize {
        let mut entries = Vec::new();
        for row in 0..self.height {
            entries.push(Beam { row, column: 0, direction: (0, 1) });
            entries.push(Beam { row, column: self.width - 1, direction: (0, -1) });
        }
        for column in 0..self.width {
            entries.push(Beam { row: 0, column, direction: (1, 0) });
            entries.push(Beam { row: self.height - 1, column, direction: (-1, 0) });
        }
        entries
            .into_iter()
            .map(|beam| self.energized(beam))
            .max()
            .unwrap_or(0)
    }
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-16.txt")?;
    let contraption = Contraption::parse(&text);
    let top_left = Beam { row: 0, column: 0, direction: (0, 1) };
    println!("{}", contraption.energized(top_left));
    println!("{}", contraption.best_entry());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    #[test]
    fn entering_top_left() {
        let contraption = Contraption::parse(EXAMPLE);
        let beam = Beam { row: 0, column: 0, direction: (0, 1) };
        assert_eq!(contraption.energized(beam), 46);
    }

    #[test]
    fn best_entry_point() {
        let contraption = Contraption::parse(EXAMPLE);
        assert_eq!(contraption.best_entry(), 51);
    }

    // A beam crossing empty tiles energizes exactly its own path.
    #[test]
    fn straight_shot() {
        let contraption = Contraption::parse("...\n...\n");
        let beam = Beam { row: 1, column: 0, direction: (0, 1) };
        assert_eq!(contraption.energized(beam), 3);
    }
}
