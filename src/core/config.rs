//! Deck configuration.
//!
//! `DeckConfig` decides where a deck's randomness comes from and how it
//! recycles its discard pile. The defaults match `Deck::new`.

use super::rng::{default_provider, GameRng, SharedRng};

/// Configuration for building a [`Deck`](crate::zones::Deck).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckConfig {
    /// Seed for a deck-owned RNG. `None` uses the thread's default provider.
    pub seed: Option<u64>,

    /// Shuffle the library after discards are recycled into it.
    ///
    /// A library that runs low without emptying is never reshuffled either
    /// way; only a recycle can trigger a shuffle.
    pub shuffle_on_recycle: bool,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_on_recycle: true,
        }
    }
}

impl DeckConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give the deck its own RNG seeded with `seed`.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep recycled discards in their discard order instead of shuffling.
    #[must_use]
    pub fn without_recycle_shuffle(mut self) -> Self {
        self.shuffle_on_recycle = false;
        self
    }

    /// The provider a deck built from this config should use.
    ///
    /// Each call with a seed builds a fresh, independent RNG.
    #[must_use]
    pub fn provider(&self) -> SharedRng {
        match self.seed {
            Some(seed) => GameRng::new(seed).into_shared(),
            None => default_provider(),
        }
    }
}
