//! Spinlock: step a cursor around an ever-growing circular buffer, inserting
//! the step number after it each time.

use advent_of_code::spinlock::{value_after_seed, Spinlock};

const STRIDE: usize = 359;

fn main() {
    // 2017 steps is small enough to simulate outright.
    let mut lock = Spinlock::new(STRIDE);
    lock.advance(2017);
    println!("{}", lock.after_cursor());

    // Fifty million insertions would spend all day shifting buffer tails;
    // only the slot after the seed matters, so track just that.
    println!("{}", value_after_seed(STRIDE, 50_000_000));
}
