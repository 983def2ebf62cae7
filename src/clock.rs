//! Monotonic millisecond time sources.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;

/// Process-wide reference point for [`MonotonicClock`] readings.
static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

/// A time source that never decreases.
pub trait Clock {
    /// Current reading in whole milliseconds.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Clock backed by [`Instant`], unaffected by wall-clock adjustments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonotonicClock;

impl MonotonicClock {
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        // sub-millisecond remainders are truncated, never rounded
        let elapsed = ORIGIN.elapsed().as_millis();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }
}

/// Manually driven clock. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(start_ms)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let millis = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.advance_ms(millis);
    }

    pub fn advance_ms(&self, millis: u64) {
        let _ = self
            .now
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| {
                Some(now.saturating_add(millis))
            });
    }

    /// Moves the reading to `millis`; earlier values are ignored.
    pub fn set(&self, millis: u64) {
        let _ = self.now.fetch_max(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
