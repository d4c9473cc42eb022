//! Random source capability.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform random integers.
///
/// The dispatcher owns no RNG state of its own; callers hand one of these in
/// per dispatch so tests can pin the outcome.
pub trait RandomSource {
    /// Uniform integer in `min..=max`. Requires `min <= max`.
    fn int_in(&mut self, min: u32, max: u32) -> u32;

    /// Uniform index into a collection of `len` elements. Requires `len > 0`.
    fn index(&mut self, len: usize) -> usize {
        self.int_in(0, (len - 1) as u32) as usize
    }
}

/// Production source backed by the thread-local RNG.
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    pub fn new() -> Self {
        Self(rand::thread_rng())
    }
}

impl Default for ThreadRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ThreadRandom {
    fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.0.gen_range(min..=max)
    }
}

/// Deterministic source for tests, seeded explicitly.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn int_in(&mut self, min: u32, max: u32) -> u32 {
        self.0.gen_range(min..=max)
    }
}
