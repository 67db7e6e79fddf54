//! Resolver Settings Domain Model
//!
//! Tunables for template resolution, persisted as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::template::RangeSpec;

/// Hard upper bound on substitution passes.
pub const MAX_SUBSTITUTION_PASSES: usize = 10;

/// Settings for the template resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Number of re-scan passes before substitution stops.
    /// Clamped to `1..=MAX_SUBSTITUTION_PASSES`.
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,

    /// Lower bound of `{random}` when no range modifier is given.
    #[serde(default = "default_random_min")]
    pub random_min: u64,

    /// Upper bound of `{random}` when no range modifier is given.
    #[serde(default = "default_random_max")]
    pub random_max: u64,
}

const fn default_max_passes() -> usize {
    MAX_SUBSTITUTION_PASSES
}

const fn default_random_min() -> u64 {
    0
}

const fn default_random_max() -> u64 {
    100
}

impl ResolverSettings {
    /// Returns the pass limit actually used by the resolver.
    #[must_use]
    pub fn effective_max_passes(&self) -> usize {
        self.max_passes.clamp(1, MAX_SUBSTITUTION_PASSES)
    }

    /// Returns the default range for the random builtin.
    #[must_use]
    pub const fn default_random_range(&self) -> RangeSpec {
        RangeSpec::new(self.random_min, self.random_max)
    }

    /// Checks that the settings are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSettings` if `max_passes` is zero or
    /// `random_min` exceeds `random_max`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.max_passes == 0 {
            return Err(DomainError::InvalidSettings(
                "max_passes must be at least 1".to_string(),
            ));
        }
        if self.random_min > self.random_max {
            return Err(DomainError::InvalidSettings(format!(
                "random_min ({}) is greater than random_max ({})",
                self.random_min, self.random_max
            )));
        }
        Ok(())
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            max_passes: default_max_passes(),
            random_min: default_random_min(),
            random_max: default_random_max(),
        }
    }
}
