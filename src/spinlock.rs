//! The spinlock: an ever-growing circular buffer where each step walks the
//! cursor forward by a fixed stride and inserts the step number just past it.

/// A fully materialized spinlock buffer.
///
/// The buffer starts out holding the single seed value `0`, with the cursor
/// resting on it. Step `s` (counting from 1) advances the cursor `stride`
/// places around the `s` values currently in the buffer, then inserts `s`
/// immediately after the cursor and leaves the cursor on the new value.
#[derive(Debug)]
pub struct Spinlock {
    buffer: Vec<usize>,
    cursor: usize,
    stride: usize,
    step: usize,
}

impl Spinlock {
    pub fn new(stride: usize) -> Spinlock {
        Spinlock {
            buffer: vec![0],
            cursor: 0,
            stride,
            step: 0,
        }
    }

    /// Perform one insertion step. Every element after the insertion point
    /// shifts one place right, so a full simulation of `n` steps costs
    /// O(n²).
    pub fn step(&mut self) {
        self.step += 1;
        self.cursor = (self.cursor + self.stride) % self.buffer.len() + 1;
        self.buffer.insert(self.cursor, self.step);
    }

    /// Run `count` insertion steps.
    pub fn advance(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// The value immediately after the cursor, wrapping past the end.
    pub fn after_cursor(&self) -> usize {
        self.buffer[(self.cursor + 1) % self.buffer.len()]
    }

    /// The value immediately after the seed `0`. Before the first step this
    /// is the seed itself.
    pub fn after_seed(&self) -> usize {
        self.buffer[1 % self.buffer.len()]
    }

    pub fn contents(&self) -> &[usize] {
        &self.buffer
    }
}

/// The value sitting just after the seed `0` once `count` steps have run,
/// without materializing the buffer.
///
/// Nothing can ever be inserted before the seed, so it stays at position 0
/// and only insertions landing at position 1 can change the answer. Tracking
/// the cursor alone makes this linear in `count`, where the full simulation
/// pays for the shifting on every insert.
pub fn value_after_seed(stride: usize, count: usize) -> usize {
    let mut cursor = 0;
    let mut after = 0;
    for step in 1..=count {
        cursor = (cursor + stride) % step + 1;
        if cursor == 1 {
            after = step;
        }
    }
    after
}

#[cfg(test)]
mod test {
    use super::*;

    // The worked example: with a stride of 3, the first nine insertions
    // produce 0 9 5 7 2 4 3 8 6 1 with the cursor on the 9.
    #[test]
    fn worked_example() {
        let mut lock = Spinlock::new(3);
        lock.advance(9);
        assert_eq!(lock.contents(), &[0, 9, 5, 7, 2, 4, 3, 8, 6, 1]);
        assert_eq!(lock.after_seed(), 9);
        assert_eq!(lock.after_cursor(), 5);
    }

    #[test]
    fn published_answer_after_2017_steps() {
        let mut lock = Spinlock::new(3);
        lock.advance(2017);
        assert_eq!(lock.after_cursor(), 638);
    }

    #[test]
    fn buffer_grows_by_one_per_step() {
        let mut lock = Spinlock::new(7);
        lock.advance(25);
        assert_eq!(lock.contents().len(), 26);
    }

    // The position-1 shortcut must agree with the literal simulation for
    // every small stride and step count.
    #[test]
    fn shortcut_matches_full_simulation() {
        for stride in 0..8 {
            let mut lock = Spinlock::new(stride);
            for count in 1..=50 {
                lock.step();
                assert_eq!(
                    value_after_seed(stride, count),
                    lock.after_seed(),
                    "stride {} count {}",
                    stride,
                    count
                );
            }
        }
    }

    #[test]
    fn no_steps_leaves_only_the_seed() {
        let lock = Spinlock::new(3);
        assert_eq!(lock.contents(), &[0]);
        assert_eq!(lock.after_cursor(), 0);
        assert_eq!(value_after_seed(3, 0), 0);
    }
}
