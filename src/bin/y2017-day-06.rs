//! Memory bank reallocation: repeatedly spread the fullest bank's blocks
//! around the ring until a configuration shows up a second time.

use advent_of_code::first_max_position;
use std::collections::HashMap;

const BANKS: [u32; 16] = [4, 10, 4, 1, 8, 4, 9, 14, 5, 1, 14, 15, 0, 15, 3, 5];

/// Redistribute until a configuration repeats. Returns the number of
/// redistribution cycles performed and the length of the loop the repeat
/// closes. Ties for the fullest bank go to the lowest index.
fn redistribute(banks: &[u32]) -> (usize, usize) {
    let mut banks = banks.to_vec();
    let mut seen = HashMap::new();
    seen.insert(banks.clone(), 0);

    for cycle in 1.. {
        let mut index = first_max_position(&banks).expect("at least one bank");
        let mut blocks = banks[index];
        banks[index] = 0;
        while blocks > 0 {
            index = (index + 1) % banks.len();
            banks[index] += 1;
            blocks -= 1;
        }

        if let Some(first) = seen.insert(banks.clone(), cycle) {
            return (cycle, cycle - first);
        }
    }

    unreachable!("the configuration space is finite, so a repeat must occur");
}

fn main() {
    let (cycles, loop_length) = redistribute(&BANKS);
    println!("{}", cycles);
    println!("{}", loop_length);
}

#[cfg(test)]
mod test {
    use super::redistribute;

    // 0 2 7 0 cycles through 2 4 1 2, 3 1 2 3, 0 2 3 4, 1 3 4 1 and back to
    // 2 4 1 2: five cycles, and the loop it closes is four long.
    #[test]
    fn example_banks() {
        assert_eq!(redistribute(&[0, 2, 7, 0]), (5, 4));
    }

    #[test]
    fn ties_go_to_the_first_bank() {
        // Both banks hold 1; the first is emptied into the second, then the
        // second (now 2) is split back, reproducing the start.
        assert_eq!(redistribute(&[1, 1]), (2, 2));
    }
}
