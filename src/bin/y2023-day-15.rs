//! Lens library initialization: hash every comma-separated step in the
//! sequence and total the results.

use advent_of_code::input;
use failure::Error;

/// The HASH algorithm: add each byte, multiply by 17, keep the remainder
/// mod 256.
fn hash(step: &str) -> usize {
    step.bytes()
        .fold(0, |sum, byte| (sum + byte as usize) * 17 % 256)
}

fn hash_sum(text: &str) -> usize {
    text.lines()
        .flat_map(|line| line.split(','))
        .map(hash)
        .sum()
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-15.txt")?;
    println!("{}", hash_sum(&text));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hashes_a_single_step() {
        assert_eq!(hash("HASH"), 52);
        assert_eq!(hash("rn=1"), 30);
        assert_eq!(hash("cm-"), 253);
    }

    #[test]
    fn sums_the_sequence() {
        let sequence = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";
        assert_eq!(hash_sum(sequence), 1320);
    }
}
