//! Jump-offset maze: follow a list of relative jumps, bumping each offset as
//! it is executed, until a jump lands outside the list.

use advent_of_code::input;
use failure::Error;

/// Run the jump list to completion and return the number of steps taken.
/// With `decay` set, offsets of three or more shrink by one after use
/// instead of growing. The solver works on a private copy, so repeated calls
/// on the same parsed input see identical results.
fn steps_to_escape(jumps: &[i64], decay: bool) -> usize {
    let mut jumps = jumps.to_vec();
    let mut pc: i64 = 0;
    let mut steps = 0;
    while pc >= 0 && (pc as usize) < jumps.len() {
        let offset = jumps[pc as usize];
        jumps[pc as usize] += if decay && offset >= 3 { -1 } else { 1 };
        pc += offset;
        steps += 1;
    }
    steps
}

fn main() -> Result<(), Error> {
    let text = input::slurp("input/y2017-day-05.txt")?;
    let jumps: Vec<i64> = input::integer_lines(&text)?;
    println!("{}", steps_to_escape(&jumps, false));
    println!("{}", steps_to_escape(&jumps, true));
    Ok(())
}

#[cfg(test)]
mod test {
    use super::steps_to_escape;

    #[test]
    fn example_maze() {
        let jumps = [0, 3, 0, 1, -3];
        assert_eq!(steps_to_escape(&jumps, false), 5);
        assert_eq!(steps_to_escape(&jumps, true), 10);
    }

    #[test]
    fn input_is_not_disturbed_between_runs() {
        let jumps = vec![0, 3, 0, 1, -3];
        let first = steps_to_escape(&jumps, false);
        assert_eq!(steps_to_escape(&jumps, false), first);
    }

    #[test]
    fn escaping_backwards_counts_too() {
        assert_eq!(steps_to_escape(&[-1], false), 1);
    }
}
