//! Seedable random providers used for shuffling.
//!
//! ## Ownership
//!
//! Piles hold a [`SharedRng`] handle. A handle can be injected at
//! construction, swapped later, or shared between several piles so one seed
//! drives all of them. When no handle is supplied, piles fall back to the
//! per-thread default provider returned by [`default_provider`].
//!
//! ```
//! use rust_deck::core::{GameRng, RandomProvider};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_in_range(0..100), b.next_in_range(0..100));
//! ```

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Source of randomness for shuffles and ancillary draws.
pub trait RandomProvider {
    /// Uniform integer in `range`. An empty range yields `range.start`.
    fn next_in_range(&mut self, range: Range<usize>) -> usize;

    /// Uniform float in `range`, never equal to `range.end`.
    ///
    /// A range with `end <= start` (or a NaN bound) yields `range.start`.
    fn next_float_in_range(&mut self, range: Range<f32>) -> f32;

    /// Reset the generator so future draws depend only on `seed`.
    fn set_seed(&mut self, seed: u64);
}

/// Shared, replaceable handle to a provider.
///
/// Cloning the handle shares the underlying stream.
pub type SharedRng = Rc<RefCell<dyn RandomProvider>>;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG with a seed picked from the thread RNG.
    ///
    /// The chosen seed is still available from [`GameRng::seed`], so a run
    /// can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was last (re)seeded with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent child stream.
    ///
    /// Forks are deterministic: the same parent seed and fork count always
    /// give the same child. Useful for handing each deck in a game its own
    /// stream from a single seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Wrap this RNG in a handle that piles can share.
    #[must_use]
    pub fn into_shared(self) -> SharedRng {
        Rc::new(RefCell::new(self))
    }
}

impl RandomProvider for GameRng {
    fn next_in_range(&mut self, range: Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.inner.gen_range(range)
    }

    fn next_float_in_range(&mut self, range: Range<f32>) -> f32 {
        if range.is_empty() {
            return range.start;
        }
        self.inner.gen_range(range)
    }

    fn set_seed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}

thread_local! {
    static DEFAULT_RNG: SharedRng = GameRng::from_entropy().into_shared();
}

/// Handle to this thread's default provider.
///
/// Every call returns a handle to the same stream.
#[must_use]
pub fn default_provider() -> SharedRng {
    DEFAULT_RNG.with(Rc::clone)
}

/// Reseed this thread's default provider.
///
/// Piles already holding the default handle see the new stream too.
pub fn set_default_seed(seed: u64) {
    debug!(seed, "reseeding default random provider");
    DEFAULT_RNG.with(|rng| rng.borrow_mut().set_seed(seed));
}

/// Draw a float in `range` from this thread's default provider.
pub fn random_float_in_range(range: Range<f32>) -> f32 {
    DEFAULT_RNG.with(|rng| rng.borrow_mut().next_float_in_range(range))
}
