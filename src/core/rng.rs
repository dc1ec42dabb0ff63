//! Deterministic random number generation for dealing and drawing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical cards and draw order
//! - **Forkable**: Independent child streams for resets and simulations
//! - **Unbiased shuffle**: Durstenfeld pass over uniform integer samples
//!
//! ```
//! use bingo_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut numbers: Vec<u8> = (1..=75).collect();
//! rng.shuffle(&mut numbers);
//!
//! let mut again: Vec<u8> = (1..=75).collect();
//! GameRng::new(42).shuffle(&mut again);
//! assert_eq!(numbers, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
///
/// Every random decision in a session (card layout, draw order) goes
/// through one of these, so a seed fully determines a game.
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

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is still recorded, so an interesting game can be
    /// replayed by reading `seed()` and passing it to `new`.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic branch.
    ///
    /// Sessions deal every reset from a fork, keyed by the fork count.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..=upper`.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Shuffle a slice in place.
    ///
    /// Durstenfeld's Fisher–Yates: walk from the last slot down to 1 and
    /// swap each slot with a uniformly chosen slot at or below it.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index(i);
            slice.swap(i, j);
        }
    }
}
