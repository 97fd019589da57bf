//! Fabric claims: rectangles staked out on a 1000×1000 grid. Count the
//! square inches claimed more than once, then find the one claim that
//! overlaps nothing.

use advent_of_code::input;
use failure::{bail, Error};
use ndarray::Array2;

const FABRIC_DIMENSION: usize = 1000;

#[derive(Debug, PartialEq)]
struct Claim {
    id: usize,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

/// A claim line reads `#123 @ 3,2: 5x4`; every field is a number, so the
/// punctuation is just separators.
fn parse_claim(line: &str) -> Result<Claim, Error> {
    let fields: Vec<usize> = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|field| !field.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()?;
    if fields.len() != 5 {
        bail!("malformed claim: {:?}", line);
    }
    Ok(Claim {
        id: fields[0],
        x: fields[1],
        y: fields[2],
        width: fields[3],
        height: fields[4],
    })
}

fn parse(text: &str) -> Result<Vec<Claim>, Error> {
    text.lines().map(parse_claim).collect()
}

/// How many claims cover each square inch.
fn coverage(claims: &[Claim]) -> Array2<u32> {
    let mut fabric = Array2::zeros((FABRIC_DIMENSION, FABRIC_DIMENSION));
    for claim in claims {
        for y in claim.y..claim.y + claim.height {
            for x in claim.x..claim.x + claim.width {
                fabric[[y, x]] += 1;
            }
        }
    }
    fabric
}

fn overlapping_area(fabric: &Array2<u32>) -> usize {
    fabric.iter().filter(|&&count| count > 1).count()
}

/// The claim whose every square inch is covered exactly once.
fn intact_claim(claims: &[Claim], fabric: &Array2<u32>) -> Option<usize> {
    claims
        .iter()
        .find(|claim| {
            (claim.y..claim.y + claim.height).all(|y| {
                (claim.x..claim.x + claim.width).all(|x| fabric[[y, x]] == 1)
            })
        })
        .map(|claim| claim.id)
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2018-day-03.txt")?;
    let claims = parse(&text)?;
    let fabric = coverage(&claims);
    println!("{}", overlapping_area(&fabric));
    match intact_claim(&claims, &fabric) {
        Some(id) => println!("{}", id),
        None => bail!("every claim overlaps another"),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    static EXAMPLE: &str = "#1 @ 1,3: 4x4\n#2 @ 3,1: 4x4\n#3 @ 5,5: 2x2\n";

    #[test]
    fn parses_claims() {
        assert_eq!(
            parse_claim("#123 @ 3,2: 5x4").unwrap(),
            Claim {
                id: 123,
                x: 3,
                y: 2,
                width: 5,
                height: 4,
            }
        );
        assert!(parse_claim("#123 @ 3,2: 5x").is_err());
    }

    // Claims 1 and 2 share the four square inches at 3..5 × 3..5.
    #[test]
    fn example_overlap() {
        let claims = parse(EXAMPLE).unwrap();
        assert_eq!(overlapping_area(&coverage(&claims)), 4);
    }

    #[test]
    fn example_intact_claim() {
        let claims = parse(EXAMPLE).unwrap();
        let fabric = coverage(&claims);
        assert_eq!(intact_claim(&claims, &fabric), Some(3));
    }
}
