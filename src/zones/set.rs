//! An ordered pile of items.
//!
//! Index 0 is the top of the pile: the next item `draw_one` returns.
//! Duplicates are allowed and the pile imposes no uniqueness.
//!
//! ## Usage
//!
//! ```
//! use rust_deck::core::GameRng;
//! use rust_deck::zones::Set;
//!
//! let mut hand = Set::with_provider(["a", "b"], GameRng::new(7).into_shared());
//! hand.add_to_top("z");
//! hand.add_all_to_bottom(["c", "d"]);
//!
//! assert_eq!(hand.draw_one().unwrap(), "z");
//! assert_eq!(hand.draw_n(2).unwrap(), vec!["a", "b"]);
//! assert_eq!(hand.len(), 2);
//! ```

use std::collections::vec_deque;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

use crate::core::error::{DeckError, Result};
use crate::core::rng::{default_provider, SharedRng};
use crate::core::shuffle::shuffle;

/// Ordered, mutable pile of `T` with its own shuffle provider.
pub struct Set<T> {
    /// Top of the pile is the front.
    items: VecDeque<T>,
    rng: SharedRng,
}

impl<T> Set<T> {
    /// Create an empty set using the thread's default provider.
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(std::iter::empty(), default_provider())
    }

    /// Create a set whose draw order matches `items` (first item drawn
    /// first), using the thread's default provider.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self::with_provider(items, default_provider())
    }

    /// Create a set whose draw order matches `items`, shuffled by `rng`.
    pub fn with_provider(items: impl IntoIterator<Item = T>, rng: SharedRng) -> Self {
        Self {
            items: items.into_iter().collect(),
            rng,
        }
    }

    /// Number of items in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item `draw_one` would return, if any.
    #[must_use]
    pub fn peek_top(&self) -> Option<&T> {
        self.items.front()
    }

    /// Iterate from top to bottom.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// The provider used by `shuffle`.
    #[must_use]
    pub fn provider(&self) -> &SharedRng {
        &self.rng
    }

    /// Put `item` on top, to be drawn next.
    pub fn add_to_top(&mut self, item: T) {
        self.items.push_front(item);
    }

    /// Put `items` on top as one run: the first of them becomes the new top.
    pub fn add_all_to_top(&mut self, items: impl IntoIterator<Item = T>) {
        let run: Vec<T> = items.into_iter().collect();
        self.items.reserve(run.len());
        for item in run.into_iter().rev() {
            self.items.push_front(item);
        }
    }

    /// Put `item` on the bottom, to be drawn last.
    pub fn add_to_bottom(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Put `items` under the existing pile, keeping their order.
    pub fn add_all_to_bottom(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Insert `item` so it becomes the `index`-th draw (0 = top).
    ///
    /// Valid positions are `0..=len`.
    pub fn add_at_index(&mut self, index: usize, item: T) -> Result<()> {
        if index > self.items.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Empty the pile.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove and return the top item.
    pub fn draw_one(&mut self) -> Result<T> {
        self.items.pop_front().ok_or(DeckError::Empty("set"))
    }

    /// Remove and return the top `count` items in draw order.
    ///
    /// Either all `count` items are drawn or, on error, none are.
    pub fn draw_n(&mut self, count: usize) -> Result<Vec<T>> {
        if count > self.items.len() {
            return Err(DeckError::InsufficientItems {
                requested: count,
                available: self.items.len(),
            });
        }
        trace!(count, "drawing from set");
        Ok(self.items.drain(..count).collect())
    }

    /// Shuffle the pile in place with this set's provider.
    pub fn shuffle(&mut self) {
        shuffle(self.items.make_contiguous(), &mut *self.rng.borrow_mut());
    }

    /// Use `rng` for future shuffles. The current order is untouched.
    pub fn replace_random_provider(&mut self, rng: SharedRng) {
        self.rng = rng;
    }

    /// Move every item out of the pile, top first.
    pub(crate) fn take_all(&mut self) -> VecDeque<T> {
        std::mem::take(&mut self.items)
    }
}

impl<T: PartialEq> Set<T> {
    /// Remove every item equal to `item`, returning how many were removed.
    pub fn remove_all_of(&mut self, item: &T) -> usize {
        let before = self.items.len();
        self.items.retain(|x| x != item);
        before - self.items.len()
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Clone> Set<T> {
    /// Copy of the pile from top to bottom.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones share the provider handle, not a copy of its state.
impl<T: Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            rng: Rc::clone(&self.rng),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set").field("items", &self.items).finish_non_exhaustive()
    }
}

impl<T> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

/// Extending adds to the bottom.
impl<T> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all_to_bottom(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
