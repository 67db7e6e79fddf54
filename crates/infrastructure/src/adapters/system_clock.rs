//! System clock adapter

use chrono::{DateTime, Utc};
use topiclab_application::ports::Clock;

/// System clock implementation using the system time and the host timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new system clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock::new();
        let now = clock.now();
        // Just verify it returns a reasonable timestamp
        assert!(now.timestamp() > 0);
    }

    #[test]
    fn test_local_offset_is_within_a_day() {
        let clock = SystemClock::new();
        let offset = clock.local_offset(clock.now());
        assert!(offset.local_minus_utc().abs() < 24 * 3600);
    }
}
