//! Damaged springs: count the arrangements of broken springs consistent
//! with each row's partial map and its run lengths, then again with the row
//! unfolded fivefold.

use advent_of_code::input;
use failure::{err_msg, Error};
use std::collections::HashMap;

struct Row {
    springs: Vec<u8>,
    runs: Vec<usize>,
}

/// A row reads `?###???????? 3,2,1`.
fn parse(text: &str) -> Result<Vec<Row>, Error> {
    text.lines()
        .map(|line| {
            let mut tokens = line.split_whitespace();
            let springs = tokens.next().ok_or_else(|| err_msg("missing springs"))?;
            let runs = tokens
                .next()
                .ok_or_else(|| err_msg("missing run lengths"))?;
            Ok(Row {
                springs: springs.bytes().collect(),
                runs: runs
                    .split(',')
                    .map(|n| Ok(n.parse()?))
                    .collect::<Result<_, Error>>()?,
            })
        })
        .collect()
}

/// Repeat the springs five times joined by `?`, and the runs five times.
fn unfold(row: &Row) -> Row {
    let mut springs = Vec::with_capacity(row.springs.len() * 5 + 4);
    for i in 0..5 {
        if i > 0 {
            springs.push(b'?');
        }
        springs.extend_from_slice(&row.springs);
    }
    Row {
        springs,
        runs: row.runs.repeat(5),
    }
}

// Memoizes on the suffix lengths and the size of the group in progress,
// which fully determine the count. Only valid within a single row.
type Cache = HashMap<(usize, usize, usize), u64>;

/// Arrangements of the remaining springs against the remaining runs, with
/// `group` broken springs already accumulated in the current run.
fn arrangements(springs: &[u8], runs: &[usize], group: usize, cache: &mut Cache) -> u64 {
    if springs.is_empty() {
        return match (runs.split_first(), group) {
            (None, 0) => 1,
            (Some((&first, rest)), g) if g == first && rest.is_empty() => 1,
            _ => 0,
        };
    }

    let key = (springs.len(), runs.len(), group);
    if let Some(&cached) = cache.get(&key) {
        return cached;
    }

    let mut total = 0;
    // The next spring works: any run in progress has to close exactly.
    if springs[0] == b'.' || springs[0] == b'?' {
        if group == 0 {
            total += arrangements(&springs[1..], runs, 0, cache);
        } else if runs.first() == Some(&group) {
            total += arrangements(&springs[1..], &runs[1..], 0, cache);
        }
    }
    // The next spring is broken: the current run grows.
    if springs[0] == b'#' || springs[0] == b'?' {
        total += arrangements(&springs[1..], runs, group + 1, cache);
    }

    cache.insert(key, total);
    total
}

fn count_row(row: &Row) -> u64 {
    let mut cache = Cache::new();
    arrangements(&row.springs, &row.runs, 0, &mut cache)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-12.txt")?;
    let rows = parse(&text)?;
    let folded: u64 = rows.iter().map(count_row).sum();
    let unfolded: u64 = rows.iter().map(|row| count_row(&unfold(row))).sum();
    println!("{}", folded);
    println!("{}", unfolded);
    Ok(())
}
