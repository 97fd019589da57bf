//! Reading and tokenizing puzzle input files.
//!
//! Every puzzle does a one-time full read of a small local text file.
//! Parsing is kept separate from file access so the solvers can be exercised
//! on string literals in tests.

use failure::Error;
use std::fs;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

/// Read an entire input file into a string. A missing file is fatal.
pub fn slurp<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    Ok(fs::read_to_string(path)?)
}

/// Parse one integer per line.
pub fn integer_lines<T>(text: &str) -> Result<Vec<T>, Error>
where
    T: FromStr<Err = ParseIntError>,
{
    text.lines().map(|line| Ok(line.trim().parse()?)).collect()
}

/// Parse a single comma-delimited list of integers.
pub fn comma_integers<T>(text: &str) -> Result<Vec<T>, Error>
where
    T: FromStr<Err = ParseIntError>,
{
    text.trim()
        .split(',')
        .map(|field| Ok(field.trim().parse()?))
        .collect()
}

/// Split each line into whitespace-delimited tokens, dropping blank lines.
pub fn token_lines(text: &str) -> Vec<Vec<&str>> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|tokens| !tokens.is_empty())
        .collect()
}
