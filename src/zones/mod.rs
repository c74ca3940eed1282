//! Piles of items.
//!
//! ## Key Types
//!
//! - `Set`: a single ordered pile with top/bottom insertion, draws and
//!   shuffling
//! - `Deck`: library, discard and exile piles with draw-and-recycle

pub mod set;
pub mod deck;

pub use set::Set;
pub use deck::Deck;
