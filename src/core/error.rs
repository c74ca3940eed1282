//! Errors raised by pile operations.
//!
//! Every fallible operation checks before it mutates, so an `Err` always
//! means the piles are exactly as they were before the call.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    /// A single draw found nothing to draw.
    #[error("no items to draw from the {0}")]
    Empty(&'static str),

    /// A bulk draw asked for more items than are available.
    #[error("cannot draw {requested} items, only {available} available")]
    InsufficientItems { requested: usize, available: usize },

    /// An insertion position outside `[0, len]`.
    #[error("index {index} is out of range for a pile of {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, DeckError>;
