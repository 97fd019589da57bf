//! Sensor histories: difference each sequence down to all zeros, then
//! extrapolate one value past the end and one before the beginning.

use advent_of_code::input;
use failure::Error;

fn parse(text: &str) -> Result<Vec<Vec<i64>>, Error> {
    text.lines()
        .map(|line| {
            line.split_whitespace()
                .map(|field| Ok(field.parse()?))
                .collect()
        })
        .collect()
}

fn differences(values: &[i64]) -> Vec<i64> {
    values.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// The next value is the last value plus the next value of the difference
/// sequence, bottoming out when a row is all zeros.
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    values.last().cloned().unwrap_or(0) + extrapolate(&differences(values))
}

/// Extrapolating backwards is extrapolating the reversed sequence forwards.
fn extrapolate_back(values: &[i64]) -> i64 {
    let reversed: Vec<i64> = values.iter().rev().cloned().collect();
    extrapolate(&reversed)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-09.txt")?;
    let histories = parse(&text)?;
    let forward: i64 = histories.iter().map(|h| extrapolate(h)).sum();
    let backward: i64 = histories.iter().map(|h| extrapolate_back(h)).sum();
    println!("{}", forward);
    println!("{}", backward);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45\n";

    #[test]
    fn extrapolates_forward() {
        assert_eq!(extrapolate(&[0, 3, 6, 9, 12, 15]), 18);
        assert_eq!(extrapolate(&[1, 3, 6, 10, 15, 21]), 28);
        assert_eq!(extrapolate(&[10, 13, 16, 21, 30, 45]), 68);
    }

    #[test]
    fn extrapolates_backward() {
        assert_eq!(extrapolate_back(&[10, 13, 16, 21, 30, 45]), 5);
    }

    #[test]
    fn example_sums() {
        let histories = parse(EXAMPLE).unwrap();
        let forward: i64 = histories.iter().map(|h| extrapolate(h)).sum();
        let backward: i64 = histories.iter().map(|h| extrapolate_back(h)).sum();
        assert_eq!(forward, 114);
        assert_eq!(backward, 2);
    }

    #[test]
    fn negative_steps_parse() {
        let histories = parse("-3 -6 -9\n").unwrap();
        assert_eq!(extrapolate(&histories[0]), -12);
    }
}
