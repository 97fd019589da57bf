//! Box IDs: checksum the list by counting IDs with exactly doubled and
//! exactly tripled letters, then find the two IDs differing at a single
//! position and report the letters they share.

use advent_of_code::{histogram, input};
use failure::{err_msg, Error};

fn checksum(ids: &[&str]) -> usize {
    let mut twos = 0;
    let mut threes = 0;
    for id in ids {
        let counts = histogram(id.chars());
        // An ID with several doubled letters still only counts once.
        if counts.values().any(|&n| n == 2) {
            twos += 1;
        }
        if counts.values().any(|&n| n == 3) {
            threes += 1;
        }
    }
    twos * threes
}

/// How many positions two IDs differ at, or `None` if their lengths differ
/// and positions cannot be paired up at all.
fn differing_positions(a: &str, b: &str) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Some(a.chars().zip(b.chars()).filter(|(a, b)| a != b).count())
}

/// Find the one pair of IDs that differ at exactly one position and return
/// the letters they agree on.
fn common_letters(ids: &[&str]) -> Option<String> {
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if differing_positions(ids[i], ids[j]) == Some(1) {
                return Some(
                    ids[i]
                        .chars()
                        .zip(ids[j].chars())
                        .filter(|(a, b)| a == b)
                        .map(|(a, _)| a)
                        .collect(),
                );
            }
        }
    }
    None
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2018-day-02.txt")?;
    let ids: Vec<&str> = text.lines().map(str::trim).collect();
    println!("{}", checksum(&ids));
    let letters = common_letters(&ids).ok_or_else(|| err_msg("no near-identical pair"))?;
    println!("{}", letters);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn example_checksum() {
        let ids = [
            "abcdef", "bababc", "abbcde", "abcccd", "aabcdd", "abcdee", "ababab",
        ];
        // Four IDs contain a double and three contain a triple.
        assert_eq!(checksum(&ids), 12);
    }

    #[test]
    fn example_common_letters() {
        let ids = ["abcde", "fghij", "klmno", "pqrst", "fguij", "axcye", "wvxyz"];
        assert_eq!(common_letters(&ids), Some("fgij".to_string()));
    }

    #[test]
    fn identical_ids_are_not_a_match() {
        assert_eq!(differing_positions("aaa", "aaa"), Some(0));
        assert_eq!(common_letters(&["aaa", "aaa"]), None);
    }

    // A shared prefix is not a one-letter difference; the extra letter has
    // no counterpart to differ from.
    #[test]
    fn ids_of_unequal_length_are_not_a_match() {
        assert_eq!(differing_positions("aaa", "aaab"), None);
        assert_eq!(common_letters(&["aaa", "aaab"]), None);
    }
}
