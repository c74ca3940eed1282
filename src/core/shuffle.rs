//! Fisher-Yates shuffling.
//!
//! Forward variant: for each index `i` from the top, swap it with a
//! uniformly chosen index in `[i, len)`. Given the same provider state and
//! the same input order the result is always the same.

use tracing::trace;

use super::rng::{default_provider, RandomProvider};

/// Shuffle `items` in place using `rng`.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomProvider + ?Sized,
{
    let len = items.len();
    trace!(len, "shuffling");
    for i in 0..len.saturating_sub(1) {
        let pos = rng.next_in_range(i..len);
        items.swap(i, pos);
    }
}

/// Shuffle `items` in place using this thread's default provider.
pub fn shuffle_with_default<T>(items: &mut [T]) {
    let rng = default_provider();
    shuffle(items, &mut *rng.borrow_mut());
}
