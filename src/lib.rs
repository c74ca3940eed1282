//! # rust-deck
//!
//! Card piles for turn-based game logic.
//!
//! ## Design Principles
//!
//! 1. **Item-Agnostic**: Piles hold any `T`. Game rules and card content
//!    live with the caller.
//!
//! 2. **Reproducible**: Every shuffle goes through a seedable
//!    `RandomProvider`. The same seed and the same calls give the same
//!    order.
//!
//! 3. **All-or-Nothing**: A failed operation leaves every pile untouched.
//!
//! ## Modules
//!
//! - `core`: RNG, Fisher-Yates shuffle, configuration, errors
//! - `zones`: `Set` (one ordered pile) and `Deck` (library, discard, exile)

pub mod core;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    default_provider, set_default_seed, shuffle, shuffle_with_default,
    DeckConfig, DeckError, GameRng, RandomProvider, Result, SharedRng,
};

pub use crate::zones::{Deck, Set};
