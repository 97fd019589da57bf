//! Passphrase validation: count phrases with no repeated word, then count
//! phrases where no word is an anagram of another.

use advent_of_code::input;
use failure::Error;
use itertools::Itertools;
use std::collections::HashSet;
use std::hash::Hash;

fn all_distinct<I, T>(items: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut seen = HashSet::new();
    items.into_iter().all(|item| seen.insert(item))
}

fn valid_count(phrases: &[Vec<&str>]) -> usize {
    phrases
        .iter()
        .filter(|words| all_distinct(words.iter()))
        .count()
}

/// Sorting each word's letters makes anagrams compare equal.
fn valid_count_no_anagrams(phrases: &[Vec<&str>]) -> usize {
    phrases
        .iter()
        .filter(|words| {
            all_distinct(words.iter().map(|w| w.chars().sorted().collect::<String>()))
        })
        .count()
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2017-day-04.txt")?;
    let phrases = input::token_lines(&text);
    println!("{}", valid_count(&phrases));
    println!("{}", valid_count_no_anagrams(&phrases));
    Ok(())
}
