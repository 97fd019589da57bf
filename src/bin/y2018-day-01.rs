//! Frequency drift: sum a list of changes, then find the first running total
//! reached twice while cycling through the list.

use advent_of_code::input;
use failure::Error;
use std::collections::HashSet;

fn final_frequency(changes: &[i64]) -> i64 {
    changes.iter().sum()
}

/// The starting total of zero counts as already seen. The list may need to
/// be walked many times before a total repeats.
fn first_repeat(changes: &[i64]) -> i64 {
    let mut seen = HashSet::new();
    let mut total = 0;
    seen.insert(total);
    for change in changes.iter().cycle() {
        total += change;
        if !seen.insert(total) {
            return total;
        }
    }
    // cycle() only finishes if the list is empty, in which case the total
    // stays at the already-seen zero.
    total
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2018-day-01.txt")?;
    let changes: Vec<i64> = input::integer_lines(&text)?;
    println!("{}", final_frequency(&changes));
    println!("{}", first_repeat(&changes));
    Ok(())
}
