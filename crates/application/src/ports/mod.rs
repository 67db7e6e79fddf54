//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and the outside
//! world. Adapters live in the infrastructure crate.

mod clock;
mod random;
mod settings_store;

pub use clock::Clock;
pub use random::RandomSource;
pub use settings_store::SettingsStore;
