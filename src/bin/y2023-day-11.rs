//! Cosmic expansion: rows and columns holding no galaxy stretch, then we sum
//! the taxicab distances between every pair of galaxies.

use advent_of_code::input;
use failure::Error;

const OBSERVED_EXPANSION: i64 = 1_000_000;

/// Galaxy positions as (row, column).
fn parse(text: &str) -> Vec<(i64, i64)> {
    text.lines()
        .enumerate()
        .flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, tile)| tile == b'#')
                .map(move |(column, _)| (row as i64, column as i64))
        })
        .collect()
}

/// Pairwise distance along one axis, with every galaxy-free line on that
/// axis stretched to `factor` lines. After sorting, any line strictly
/// between two consecutive coordinates holds no galaxy at all (it would sit
/// between them in sorted order otherwise), and the gap between positions
/// `i - 1` and `i` is crossed by exactly `i × (n − i)` pairs.
fn axis_sum(mut coords: Vec<i64>, factor: i64) -> i64 {
    coords.sort();
    let n = coords.len() as i64;
    let mut sum = 0;
    for i in 1..coords.len() {
        let gap = coords[i] - coords[i - 1];
        let stretched = gap + (gap - 1).max(0) * (factor - 1);
        sum += stretched * i as i64 * (n - i as i64);
    }
    sum
}

/// Taxicab distance splits into the two axes, so each axis can be summed
/// independently.
fn distance_sum(galaxies: &[(i64, i64)], factor: i64) -> i64 {
    axis_sum(galaxies.iter().map(|g| g.0).collect(), factor)
        + axis_sum(galaxies.iter().map(|g| g.1).collect(), factor)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-11.txt")?;
    let galaxies = parse(&text);
    println!("{}", distance_sum(&galaxies, 2));
    println!("{}", distance_sum(&galaxies, OBSERVED_EXPANSION));
    Ok(())
}
