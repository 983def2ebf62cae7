//! Number of fractional digits kept when rounding a duration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StopwatchError;

/// Timestamps carry millisecond resolution, so digits past the third
/// fractional digit of a second never change a rounded value.
const MILLIS_DIGITS: u32 = 3;

/// Fractional digits (of seconds) retained when rounding durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Precision(u32);

impl Precision {
    pub const DEFAULT: Self = Self(2);

    pub const fn new(digits: u32) -> Self {
        Self(digits)
    }

    pub const fn digits(self) -> u32 {
        self.0
    }

    /// Rounds `millis` half-up to this many fractional digits of a second,
    /// returning whole milliseconds.
    pub const fn round_millis(self, millis: u64) -> u64 {
        let digits = if self.0 < MILLIS_DIGITS {
            self.0
        } else {
            MILLIS_DIGITS
        };
        let step = 10u64.pow(MILLIS_DIGITS - digits);
        millis.saturating_add(step / 2) / step * step
    }

    /// Rounded duration in seconds.
    pub fn round_seconds(self, millis: u64) -> f64 {
        self.round_millis(millis) as f64 / 1_000.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for Precision {
    fn from(digits: u32) -> Self {
        Self(digits)
    }
}

impl From<Precision> for u32 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl TryFrom<i64> for Precision {
    type Error = StopwatchError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| StopwatchError::InvalidPrecision { value })
    }
}

impl FromStr for Precision {
    type Err = StopwatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|source| StopwatchError::ParsePrecision {
                input: s.to_string(),
                source,
            })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
