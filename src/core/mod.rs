//! Core building blocks: randomness, shuffling, configuration, errors.
//!
//! Nothing here knows about piles; `zones` builds on these.

pub mod rng;
pub mod shuffle;
pub mod config;
pub mod error;

pub use rng::{
    default_provider, random_float_in_range, set_default_seed, GameRng, RandomProvider,
    SharedRng,
};
pub use shuffle::{shuffle, shuffle_with_default};
pub use config::DeckConfig;
pub use error::{DeckError, Result};
