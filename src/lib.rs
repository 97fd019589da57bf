use std::collections::HashMap;
use std::hash::Hash;

pub mod input;
pub mod spinlock;

/// Count how many times each distinct item appears in `iter`.
pub fn histogram<T, I>(iter: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    let mut hist = HashMap::new();
    for elt in iter {
        *hist.entry(elt).or_insert(0) += 1;
    }
    hist
}

/// Return the index of the largest item in `items`. If several items share
/// the largest value, return the index of the first of them. Empty slices
/// have no maximum.
pub fn first_max_position<T: Ord>(items: &[T]) -> Option<usize> {
    let mut best = None;
    for (i, item) in items.iter().enumerate() {
        match best {
            Some(b) if items[b] >= *item => (),
            _ => best = Some(i),
        }
    }
    best
}

/// Return the index of the one item that differs from every other item, or
/// `None` if the items are all equal. The caller promises that at most one
/// item is out of line; with fewer than three items there is no majority to
/// compare against, so the answer is `None`.
pub fn odd_one_out<T: PartialEq>(items: &[T]) -> Option<usize> {
    if items.len() < 3 {
        return None;
    }

    // Two of the first three items must agree on the common value.
    let common = if items[0] == items[1] || items[0] == items[2] {
        &items[0]
    } else {
        &items[1]
    };

    items.iter().position(|item| item != common)
}
