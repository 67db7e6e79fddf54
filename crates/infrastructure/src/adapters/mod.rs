//! Infrastructure adapters

mod system_clock;
mod thread_rng;

pub use system_clock::SystemClock;
pub use thread_rng::ThreadRngSource;
