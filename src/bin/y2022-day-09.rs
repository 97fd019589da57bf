//! Rope physics: the head knot follows the given motions one step at a
//! time, every following knot pulls to within one square of the knot ahead,
//! and we count the squares the tail visits.

use advent_of_code::input;
use failure::{bail, err_msg, Error};
use std::collections::HashSet;

struct Motion {
    direction: (i64, i64),
    steps: usize,
}

/// A motion line reads `R 4`.
fn parse(text: &str) -> Result<Vec<Motion>, Error> {
    let mut motions = Vec::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let direction = match tokens.next() {
            Some("U") => (0, 1),
            Some("D") => (0, -1),
            Some("L") => (-1, 0),
            Some("R") => (1, 0),
            other => bail!("unknown direction {:?}", other),
        };
        let steps = tokens
            .next()
            .ok_or_else(|| err_msg("missing step count"))?
            .parse()?;
        motions.push(Motion { direction, steps });
    }
    Ok(motions)
}

/// Drag a rope of `knots` knots through every motion and count the distinct
/// squares the last knot rests on. A knot stays put while it is within one
/// square of the knot ahead, and otherwise closes in one step on each axis,
/// so a knot that is off both axes moves diagonally.
fn tail_visits(motions: &[Motion], knots: usize) -> usize {
    let mut rope = vec![(0i64, 0i64); knots];
    let mut visited = HashSet::new();
    visited.insert(rope[knots - 1]);

    for motion in motions {
        for _ in 0..motion.steps {
            rope[0].0 += motion.direction.0;
            rope[0].1 += motion.direction.1;
            for k in 1..knots {
                let dx = rope[k - 1].0 - rope[k].0;
                let dy = rope[k - 1].1 - rope[k].1;
                if dx.abs() <= 1 && dy.abs() <= 1 {
                    break; // nothing past this knot moves either
                }
                rope[k].0 += dx.signum();
                rope[k].1 += dy.signum();
            }
            visited.insert(rope[knots - 1]);
        }
    }
    visited.len()
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2022-day-09.txt")?;
    let motions = parse(&text)?;
    println!("{}", tail_visits(&motions, 2));
    println!("{}", tail_visits(&motions, 10));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2\n";
    static LARGER: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20\n";

    #[test]
    fn two_knots() {
        let motions = parse(EXAMPLE).unwrap();
        assert_eq!(tail_visits(&motions, 2), 13);
    }

    // With ten knots the short example never stretches the tail off its
    // starting square.
    #[test]
    fn ten_knots() {
        let motions = parse(EXAMPLE).unwrap();
        assert_eq!(tail_visits(&motions, 10), 1);

        let motions = parse(LARGER).unwrap();
        assert_eq!(tail_visits(&motions, 10), 36);
    }

    #[test]
    fn rejects_unknown_directions() {
        assert!(parse("Q 3\n").is_err());
    }
}
