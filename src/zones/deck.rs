//! Three-pile deck: library, discarded, exiled.
//!
//! Drawing pulls from the library. When the library is empty, the discard
//! pile is moved under it and shuffled back in before the draw. The exile
//! pile only returns to play through an explicit
//! [`Deck::return_exiled_to_bottom_of_library`].
//!
//! Routing drawn items into `discarded` or `exiled` is up to the caller.
//!
//! ```
//! use rust_deck::core::GameRng;
//! use rust_deck::zones::Deck;
//!
//! let mut deck = Deck::with_provider([1, 2], GameRng::new(3).into_shared());
//! let first = deck.draw_one().unwrap();
//! let second = deck.draw_one().unwrap();
//! deck.discarded.add_all_to_bottom([first, second]);
//!
//! // Library is empty, so the discards are recycled and shuffled.
//! let third = deck.draw_one().unwrap();
//! assert!(third == 1 || third == 2);
//! assert_eq!(deck.library.len(), 1);
//! assert!(deck.discarded.is_empty());
//! ```

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::config::DeckConfig;
use crate::core::error::{DeckError, Result};
use crate::core::rng::{default_provider, SharedRng};

use super::set::Set;

/// A draw pile with discard and exile piles sharing one provider.
pub struct Deck<T> {
    /// Draw pile.
    pub library: Set<T>,
    /// Used items, recycled into the library when it runs out.
    pub discarded: Set<T>,
    /// Items removed from play.
    pub exiled: Set<T>,
    shuffle_on_recycle: bool,
}

impl<T> Deck<T> {
    /// Create a deck with `library` in draw order, using the thread's
    /// default provider.
    pub fn new(library: impl IntoIterator<Item = T>) -> Self {
        Self::with_provider(library, default_provider())
    }

    /// Create a deck whose three piles all shuffle with `rng`.
    pub fn with_provider(library: impl IntoIterator<Item = T>, rng: SharedRng) -> Self {
        Self {
            library: Set::with_provider(library, Rc::clone(&rng)),
            discarded: Set::with_provider(std::iter::empty(), Rc::clone(&rng)),
            exiled: Set::with_provider(std::iter::empty(), rng),
            shuffle_on_recycle: true,
        }
    }

    /// Create a deck from `config`.
    pub fn from_config(library: impl IntoIterator<Item = T>, config: &DeckConfig) -> Self {
        let mut deck = Self::with_provider(library, config.provider());
        deck.shuffle_on_recycle = config.shuffle_on_recycle;
        deck
    }

    /// Items reachable by drawing: library plus discards. Exile is excluded.
    #[must_use]
    pub fn library_and_discard_size(&self) -> usize {
        self.library.len() + self.discarded.len()
    }

    /// Whether `draw_one` shuffles after recycling discards.
    #[must_use]
    pub fn shuffles_on_recycle(&self) -> bool {
        self.shuffle_on_recycle
    }

    /// Move the discard pile, in order, under the library.
    pub fn return_discards_to_bottom_of_library(&mut self) -> &mut Self {
        let recycled = self.discarded.take_all();
        debug!(count = recycled.len(), "returning discards to library");
        self.library.add_all_to_bottom(recycled);
        self
    }

    /// Move the exile pile, in order, under the library.
    pub fn return_exiled_to_bottom_of_library(&mut self) -> &mut Self {
        let returned = self.exiled.take_all();
        debug!(count = returned.len(), "returning exiled items to library");
        self.library.add_all_to_bottom(returned);
        self
    }

    /// Draw the top library item, recycling discards first if the library
    /// is empty.
    ///
    /// The library is shuffled only right after a recycle. A library that
    /// never empties keeps its order.
    pub fn draw_one(&mut self) -> Result<T> {
        if self.library.is_empty() {
            self.return_discards_to_bottom_of_library();
            if self.library.is_empty() {
                return Err(DeckError::Empty("library or discard pile"));
            }
            if self.shuffle_on_recycle {
                self.library.shuffle();
            }
        }
        self.library.draw_one()
    }

    /// Draw `count` items one at a time, so each draw may recycle.
    ///
    /// Fails without touching any pile if `count` exceeds
    /// [`library_and_discard_size`](Self::library_and_discard_size).
    pub fn draw_n(&mut self, count: usize) -> Result<Vec<T>> {
        let available = self.library_and_discard_size();
        if count > available {
            return Err(DeckError::InsufficientItems {
                requested: count,
                available,
            });
        }
        trace!(count, "drawing from deck");
        (0..count).map(|_| self.draw_one()).collect()
    }

    /// Use `rng` for all three piles' future shuffles.
    pub fn replace_random_provider(&mut self, rng: SharedRng) {
        self.library.replace_random_provider(Rc::clone(&rng));
        self.discarded.replace_random_provider(Rc::clone(&rng));
        self.exiled.replace_random_provider(rng);
    }
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T: fmt::Debug> fmt::Debug for Deck<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("library", &self.library)
            .field("discarded", &self.discarded)
            .field("exiled", &self.exiled)
            .field("shuffle_on_recycle", &self.shuffle_on_recycle)
            .finish()
    }
}
