//! Deterministic port implementations for unit tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, FixedOffset, Utc};

use crate::ports::{Clock, RandomSource};

/// A clock frozen at one instant, with a configurable local offset.
///
/// The local offset can switch at a given instant to simulate a DST change.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
    local_offset: FixedOffset,
    offset_change: Option<(DateTime<Utc>, FixedOffset)>,
}

impl FixedClock {
    /// Freezes the clock at an RFC 3339 timestamp. Local time equals UTC.
    pub fn at(rfc3339: &str) -> Self {
        Self {
            now: DateTime::parse_from_rfc3339(rfc3339)
                .expect("valid RFC 3339 timestamp")
                .with_timezone(&Utc),
            local_offset: FixedOffset::east_opt(0).unwrap(),
            offset_change: None,
        }
    }

    /// Sets the local offset in seconds east of UTC.
    pub fn with_local_offset(mut self, seconds: i32) -> Self {
        self.local_offset = FixedOffset::east_opt(seconds).expect("valid offset");
        self
    }

    /// Switches the local offset to `seconds` from the RFC 3339 instant on.
    pub fn with_offset_change(mut self, rfc3339: &str, seconds: i32) -> Self {
        let at = DateTime::parse_from_rfc3339(rfc3339)
            .expect("valid RFC 3339 timestamp")
            .with_timezone(&Utc);
        self.offset_change = Some((at, FixedOffset::east_opt(seconds).expect("valid offset")));
        self
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn local_offset(&self, at: DateTime<Utc>) -> FixedOffset {
        match self.offset_change {
            Some((from, offset)) if at >= from => offset,
            _ => self.local_offset,
        }
    }
}

/// Xorshift sequence, reproducible across runs.
#[derive(Debug)]
pub struct SequenceRandom {
    state: AtomicU64,
    constant: Option<u8>,
}

impl SequenceRandom {
    pub fn new() -> Self {
        Self {
            state: AtomicU64::new(0x9E37_79B9_7F4A_7C15),
            constant: None,
        }
    }

    /// Fills every byte with `byte`.
    pub fn constant(byte: u8) -> Self {
        Self {
            constant: Some(byte),
            ..Self::new()
        }
    }

    fn next_u64(&self) -> u64 {
        let mut x = self.state.load(Ordering::Relaxed);
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state.store(x, Ordering::Relaxed);
        x
    }
}

impl RandomSource for SequenceRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        if let Some(byte) = self.constant {
            dest.fill(byte);
            return;
        }
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn range_inclusive(&self, min: u64, max: u64) -> u64 {
        let span = max - min;
        if span == u64::MAX {
            return self.next_u64();
        }
        min + self.next_u64() % (span + 1)
    }
}
