//! Lava lagoon: the diggers trace out a closed trench and dig out its
//! interior. Measure the lagoon from the plain dig plan, then from the plan
//! hidden in the hex color codes.

use advent_of_code::input;
use failure::{bail, err_msg, format_err, Error};

struct Step {
    direction: (i64, i64), // (column, row) offsets
    distance: i64,
}

/// A dig plan line reads `R 6 (#70c710)`.
fn parse(text: &str) -> Result<Vec<Step>, Error> {
    text.lines()
        .map(|line| {
            let mut tokens = line.split_whitespace();
            let direction = match tokens.next() {
                Some("R") => (1, 0),
                Some("L") => (-1, 0),
                Some("U") => (0, -1),
                Some("D") => (0, 1),
                other => bail!("unknown dig direction {:?}", other),
            };
            let distance = tokens
                .next()
                .ok_or_else(|| err_msg("missing dig distance"))?
                .parse()?;
            Ok(Step { direction, distance })
        })
        .collect()
}

/// The real plan: each color is five hex digits of distance and one final
/// digit of direction.
fn parse_encoded(text: &str) -> Result<Vec<Step>, Error> {
    text.lines()
        .map(|line| {
            let color = line
                .split_whitespace()
                .nth(2)
                .and_then(|token| token.strip_prefix("(#"))
                .and_then(|token| token.strip_suffix(')'))
                .ok_or_else(|| format_err!("missing color code: {:?}", line))?;
            if color.len() != 6 {
                bail!("color code is not six digits: {:?}", color);
            }
            let distance = i64::from_str_radix(&color[..5], 16)?;
            let direction = match &color[5..] {
                "0" => (1, 0),
                "1" => (0, 1),
                "2" => (-1, 0),
                "3" => (0, -1),
                other => bail!("unknown encoded direction {:?}", other),
            };
            Ok(Step { direction, distance })
        })
        .collect()
}

/// Total dug-out area: the shoelace formula gives the area enclosed by the
/// path through the trench centers, and Pick's theorem turns that into a
/// count of dug squares, interior plus boundary.
fn lagoon_size(steps: &[Step]) -> i64 {
    let mut twice_area = 0;
    let mut boundary = 0;
    let (mut x, mut y) = (0, 0);
    for step in steps {
        let next_x = x + step.direction.0 * step.distance;
        let next_y = y + step.direction.1 * step.distance;
        twice_area += x * next_y - next_x * y;
        boundary += step.distance;
        x = next_x;
        y = next_y;
    }
    let interior = twice_area.abs() / 2 - boundary / 2 + 1;
    interior + boundary
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2023-day-18.txt")?;
    println!("{}", lagoon_size(&parse(&text)?));
    println!("{}", lagoon_size(&parse_encoded(&text)?));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn plain_plan() {
        let steps = parse(EXAMPLE).unwrap();
        assert_eq!(lagoon_size(&steps), 62);
    }

    #[test]
    fn encoded_plan() {
        let steps = parse_encoded(EXAMPLE).unwrap();
        assert_eq!(lagoon_size(&steps), 952408144115);
    }

    #[test]
    fn unit_square() {
        // A 2x2 trench with no interior holds four squares.
        let steps = parse("R 1 (#000000)\nD 1 (#000000)\nL 1 (#000000)\nU 1 (#000000)\n").unwrap();
        assert_eq!(lagoon_size(&steps), 4);
    }

    #[test]
    fn rejects_short_color_codes() {
        assert!(parse_encoded("R 6 (#70c71)\n").is_err());
    }
}
