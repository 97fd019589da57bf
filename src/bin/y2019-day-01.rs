//! Rocket fuel: every module needs mass / 3 − 2 units of fuel, and the fuel
//! itself has mass that needs more fuel.

use advent_of_code::input;
use failure::Error;

fn fuel(mass: i64) -> i64 {
    mass / 3 - 2
}

fn total_fuel(masses: &[i64]) -> i64 {
    masses.iter().cloned().map(fuel).sum()
}

/// Charge fuel for the fuel, too, until the next increment rounds to zero or
/// below.
fn total_fuel_compounded(masses: &[i64]) -> i64 {
    masses
        .iter()
        .map(|&mass| {
            let mut total = 0;
            let mut added = fuel(mass);
            while added > 0 {
                total += added;
                added = fuel(added);
            }
            total
        })
        .sum()
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2019-day-01.txt")?;
    let masses: Vec<i64> = input::integer_lines(&text)?;
    println!("{}", total_fuel(&masses));
    println!("{}", total_fuel_compounded(&masses));
    Ok(())
}
