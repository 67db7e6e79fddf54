//! Random number port

/// Port for drawing random values.
///
/// Builtins only need statistical uniqueness, so implementations are free to
/// use a fast non-cryptographic generator.
pub trait RandomSource: Send + Sync {
    /// Fills `dest` with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Returns a uniformly distributed value in `min..=max`.
    ///
    /// Callers guarantee `min <= max`.
    fn range_inclusive(&self, min: u64, max: u64) -> u64;
}
