//! Clock port for time-related operations

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Port for getting the current time.
///
/// This abstraction allows testing time-dependent code by providing
/// a mock implementation.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the host's UTC offset in effect at `at`.
    fn local_offset(&self, at: DateTime<Utc>) -> FixedOffset {
        *at.with_timezone(&Local).offset()
    }
}
