//! Mirrored ash patterns: find the reflection line in each pattern, first
//! exactly and then allowing for a single smudged tile.

use advent_of_code::input;
use failure::{bail, Error};

struct Pattern {
    rows: Vec<u32>,
    columns: Vec<u32>,
}

/// Patterns are blocks of `#` and `.` separated by blank lines. Each row and
/// each column packs into a bitmask, so comparing two lines is an xor.
fn parse(text: &str) -> Vec<Pattern> {
    text.split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            let lines: Vec<&[u8]> = block.lines().map(|line| line.as_bytes()).collect();
            let rows = lines
                .iter()
                .map(|line| {
                    line.iter()
                        .fold(0, |mask, &tile| mask << 1 | (tile == b'#') as u32)
                })
                .collect();
            let columns = (0..lines[0].len())
                .map(|c| {
                    lines
                        .iter()
                        .fold(0, |mask, line| mask << 1 | (line[c] == b'#') as u32)
                })
                .collect();
            Pattern { rows, columns }
        })
        .collect()
}

/// The position of the mirror line among `masks`, if any: the fold where the
/// reflected pairs differ in exactly `smudges` bits total.
fn mirror_position(masks: &[u32], smudges: u32) -> Option<usize> {
    (1..masks.len()).find(|&fold| {
        let differing: u32 = (0..fold.min(masks.len() - fold))
            .map(|k| (masks[fold - 1 - k] ^ masks[fold + k]).count_ones())
            .sum();
        differing == smudges
    })
}

/// A vertical mirror scores its column count, a horizontal one a hundred
/// times its row count.
fn score(pattern: &Pattern, smudges: u32) -> Result<usize, Error> {
    if let Some(columns) = mirror_position(&pattern.columns, smudges) {
        return Ok(columns);
    }
    if let Some(rows) = mirror_position(&pattern.rows, smudges) {
        return Ok(rows * 100);
    }
    bail!("pattern has no mirror with {} smudges", smudges);
}

fn summarize(patterns: &[Pattern], smudges: u32) -> Result<usize, Error> {
    patterns.iter().map(|pattern| score(pattern, smudges)).sum()
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-13.txt")?;
    let patterns = parse(&text);
    println!("{}", summarize(&patterns, 0)?);
    println!("{}", summarize(&patterns, 1)?);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    #[test]
    fn exact_mirrors() {
        let patterns = parse(EXAMPLE);
        assert_eq!(score(&patterns[0], 0).unwrap(), 5);
        assert_eq!(score(&patterns[1], 0).unwrap(), 400);
        assert_eq!(summarize(&patterns, 0).unwrap(), 405);
    }

    #[test]
    fn smudged_mirrors() {
        let patterns = parse(EXAMPLE);
        assert_eq!(score(&patterns[0], 1).unwrap(), 300);
        assert_eq!(score(&patterns[1], 1).unwrap(), 100);
        assert_eq!(summarize(&patterns, 1).unwrap(), 400);
    }

    #[test]
    fn mirrorless_pattern_is_an_error() {
        let patterns = parse("#..\n.#.\n..#\n");
        assert!(score(&patterns[0], 0).is_err());
    }
}
