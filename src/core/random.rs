//! Injectable random source for `RANDOM` string pools.

use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Draws uniformly distributed indices.
pub trait RandomSource: Send {
    /// Return an index in `[0, bound)`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.random_range(0..bound)
    }
}

/// The engine's single random source, safe for concurrent draws.
pub struct SharedRandom {
    source: Mutex<Box<dyn RandomSource>>,
}

impl SharedRandom {
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Mutex::new(Box::new(source)),
        }
    }

    /// Reproducible source for tests and seeded configurations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource(SmallRng::seed_from_u64(seed)))
    }

    pub fn from_os_rng() -> Self {
        Self::new(RngSource(SmallRng::from_os_rng()))
    }

    pub fn next_index(&self, bound: usize) -> usize {
        debug_assert!(bound > 0, "random bound must be positive");
        let mut source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
        source.next_index(bound)
    }
}

impl Default for SharedRandom {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl fmt::Debug for SharedRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRandom").finish_non_exhaustive()
    }
}
