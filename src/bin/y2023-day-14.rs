//! Parabolic reflector dish: tilt the platform north so every round rock
//! rolls as far up its column as it can, then total the load on the north
//! support beams.

use advent_of_code::input;
use failure::Error;

/// Load after tilting north, computed without moving anything: scanning a
/// column top-down, each round rock comes to rest on the lowest free row,
/// which is just below the last cube rock or rested rock seen.
fn north_load(grid: &[&[u8]]) -> usize {
    let height = grid.len();
    let width = grid.first().map_or(0, |row| row.len());
    let mut load = 0;
    for column in 0..width {
        let mut free_row = 0;
        for row in 0..height {
            match grid[row][column] {
                b'O' => {
                    load += height - free_row;
                    free_row += 1;
                }
                b'#' => free_row = row + 1,
                _ => {}
            }
        }
    }
    load
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-14.txt")?;
    let grid: Vec<&[u8]> = text.lines().map(|line| line.as_bytes()).collect();
    println!("{}", north_load(&grid));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn tilted_north() {
        let grid: Vec<&[u8]> = EXAMPLE.lines().map(|line| line.as_bytes()).collect();
        assert_eq!(north_load(&grid), 136);
    }

    #[test]
    fn rocks_stack_below_cubes() {
        // The cube pins both round rocks to the bottom half.
        let grid: Vec<&[u8]> = ".\n#\nO\nO\n".lines().map(|line| line.as_bytes()).collect();
        assert_eq!(north_load(&grid), 3);
    }
}
