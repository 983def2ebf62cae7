use std::fmt;
use std::time::Duration;

use stopwatch_humanize::{MinimumUnit, NaturalDelta};
use tracing::trace;

use crate::clock::{Clock, MonotonicClock};
use crate::error::Result;
use crate::precision::Precision;

const RENDER: NaturalDelta = NaturalDelta::new().minimum_unit(MinimumUnit::Milliseconds);

/// Elapsed-time measurement with pause/resume.
///
/// A stopwatch is running while it has no end timestamp and stopped once it
/// has one. Resuming shifts `start` forward by the paused gap so the
/// accumulated duration survives without a separate accumulator.
///
/// There is no internal locking; share an instance across threads behind a
/// mutex.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    precision: Precision,
    start: u64,
    end: Option<u64>,
}

impl Stopwatch {
    /// Creates a running stopwatch on the monotonic clock.
    pub fn new(precision: Precision) -> Self {
        Self::with_clock(precision, MonotonicClock::new())
    }

    /// Like [`Stopwatch::new`], rejecting negative precision.
    pub fn try_new(precision: i64) -> Result<Self> {
        Ok(Self::new(Precision::try_from(precision)?))
    }

    /// Creates a running stopwatch with the default precision.
    pub fn start_new() -> Self {
        Self::new(Precision::DEFAULT)
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::start_new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(precision: Precision, clock: C) -> Self {
        let start = clock.now_ms();
        Self {
            clock,
            precision,
            start,
            end: None,
        }
    }

    /// Elapsed milliseconds, up to now while running or up to the stop
    /// instant once stopped.
    pub fn duration(&self) -> u64 {
        match self.end {
            Some(end) => end.saturating_sub(self.start),
            None => self.clock.now_ms().saturating_sub(self.start),
        }
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.duration())
    }

    /// Elapsed seconds rounded to the configured precision.
    ///
    /// Unlike [`Stopwatch::render`], sub-second values are rounded too, so
    /// 999 ms reads as `1.0` at precision 2.
    pub fn seconds(&self) -> f64 {
        self.precision.round_seconds(self.duration())
    }

    pub const fn is_running(&self) -> bool {
        self.end.is_none()
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Resumes a stopped stopwatch, keeping the time accumulated so far.
    pub fn start(&mut self) -> &mut Self {
        if !self.is_running() {
            let elapsed = self.duration();
            self.start = self.clock.now_ms().saturating_sub(elapsed);
            self.end = None;
            trace!(duration_ms = elapsed, "stopwatch resumed");
        }
        self
    }

    /// Freezes the duration at its current value.
    pub fn stop(&mut self) -> &mut Self {
        if self.is_running() {
            self.end = Some(self.clock.now_ms());
            trace!(duration_ms = self.duration(), "stopwatch stopped");
        }
        self
    }

    /// Discards the accumulated time and keeps running from now.
    pub fn restart(&mut self) -> &mut Self {
        let discarded = self.duration();
        self.start = self.clock.now_ms();
        self.end = None;
        trace!(discarded_ms = discarded, "stopwatch restarted");
        self
    }

    /// Stops with a duration of exactly zero.
    pub fn reset(&mut self) -> &mut Self {
        let discarded = self.duration();
        self.start = self.clock.now_ms();
        self.end = Some(self.start);
        trace!(discarded_ms = discarded, "stopwatch reset");
        self
    }

    /// Approximate natural-language duration, e.g. "3 seconds".
    ///
    /// Durations of a second or more are rounded to the configured precision
    /// before a unit is chosen. Shorter ones are shown in whole
    /// milliseconds.
    pub fn render(&self) -> String {
        let millis = self.duration();
        let shown = if millis < 1_000 {
            millis
        } else {
            self.precision.round_millis(millis)
        };
        RENDER.format(Duration::from_millis(shown))
    }
}

impl<C: Clock> fmt::Display for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
