//! Random source adapter backed by the thread-local generator

use rand::{Rng, RngCore};
use topiclab_application::ports::RandomSource;

/// Random source drawing from `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    /// Creates a new random source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::rng().fill_bytes(dest);
    }

    fn range_inclusive(&self, min: u64, max: u64) -> u64 {
        rand::rng().random_range(min..=max)
    }
}
