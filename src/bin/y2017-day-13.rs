//! Packet scanner firewall: scanners sweep up and down their layers while
//! the packet crosses the top row, one layer per tick.

use advent_of_code::input;
use failure::{bail, Error};

struct Layer {
    depth: usize,
    range: usize,
}

/// A line reads `0: 3`. Depths with no scanner simply never appear; absence
/// is a no-op, not an error.
fn parse(text: &str) -> Result<Vec<Layer>, Error> {
    let mut layers = Vec::new();
    for line in text.lines() {
        let mut fields = line.splitn(2, ':');
        match (fields.next(), fields.next()) {
            (Some(depth), Some(range)) => {
                let layer = Layer {
                    depth: depth.trim().parse()?,
                    range: range.trim().parse()?,
                };
                // A scanner has to have at least one cell to sweep.
                if layer.range == 0 {
                    bail!("scanner range must be positive: {:?}", line);
                }
                layers.push(layer);
            }
            _ => bail!("malformed layer: {:?}", line),
        }
    }
    Ok(layers)
}

/// Where a scanner with the given range sits after `time` ticks. The sweep
/// up and back is a triangle wave of amplitude `range - 1`, so the position
/// is a closed form of the time rather than a simulation.
fn scanner_position(time: usize, range: usize) -> usize {
    let amplitude = range - 1;
    if amplitude == 0 {
        return 0;
    }
    let phase = time % (amplitude * 2);
    amplitude - (phase as i64 - amplitude as i64).abs() as usize
}

/// Severity of crossing with no delay: each layer whose scanner is at the
/// top as the packet passes adds depth × range.
fn severity(layers: &[Layer]) -> usize {
    layers
        .iter()
        .filter(|layer| scanner_position(layer.depth, layer.range) == 0)
        .map(|layer| layer.depth * layer.range)
        .sum()
}

fn caught(layers: &[Layer], delay: usize) -> bool {
    layers
        .iter()
        .any(|layer| scanner_position(delay + layer.depth, layer.range) == 0)
}

/// Smallest delay that crosses the whole firewall untouched. Brute force:
/// try every delay in turn.
fn safe_delay(layers: &[Layer]) -> usize {
    (0..)
        .find(|&delay| !caught(layers, delay))
        .expect("some delay slips through")
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2017-day-13.txt")?;
    let layers = parse(&text)?;
    println!("{}", severity(&layers));
    println!("{}", safe_delay(&layers));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "0: 3\n1: 2\n4: 4\n6: 4\n";

    #[test]
    fn triangle_wave() {
        let positions: Vec<usize> = (0..7).map(|t| scanner_position(t, 3)).collect();
        assert_eq!(positions, vec![0, 1, 2, 1, 0, 1, 2]);

        // A one-cell layer pins its scanner at the top.
        assert_eq!(scanner_position(17, 1), 0);
    }

    // Caught at depths 0 and 6: severity 0*3 + 6*4.
    #[test]
    fn example_severity() {
        let layers = parse(EXAMPLE).unwrap();
        assert_eq!(severity(&layers), 24);
    }

    #[test]
    fn example_delay() {
        let layers = parse(EXAMPLE).unwrap();
        assert_eq!(safe_delay(&layers), 10);
    }

    #[test]
    fn zero_range_is_an_error() {
        assert!(parse("0: 0\n").is_err());
        assert!(parse("0: 3\n2: 0\n").is_err());
    }

    // Severity only counts collisions; a caught packet at depth 0 scores
    // zero but is still caught, which is why part two cannot just look for
    // severity zero.
    #[test]
    fn depth_zero_collisions_score_nothing_but_count() {
        let layers = parse("0: 3\n").unwrap();
        assert_eq!(severity(&layers), 0);
        assert!(caught(&layers, 0));
        assert_eq!(safe_delay(&layers), 1);
    }
}
