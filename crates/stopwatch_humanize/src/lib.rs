//! Coarse natural-language rendering of elapsed durations.
//!
//! Phrases pick the largest unit that keeps the magnitude human-scale
//! ("a minute", "5 minutes", "2 hours"). A year is 365 days and a month is
//! 30.5 days; there is no calendar awareness.

use std::time::Duration;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;
const DAYS_PER_YEAR: u64 = 365;

/// Smallest unit a phrase may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinimumUnit {
    /// Sub-second durations render as "a moment"
    #[default]
    Seconds,
    /// Sub-second durations render as "N milliseconds"
    Milliseconds,
}

/// Formatting options for [`naturaldelta`]-style phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaturalDelta {
    months: bool,
    minimum_unit: MinimumUnit,
}

impl Default for NaturalDelta {
    fn default() -> Self {
        Self::new()
    }
}

impl NaturalDelta {
    pub const fn new() -> Self {
        Self {
            months: true,
            minimum_unit: MinimumUnit::Seconds,
        }
    }

    /// Whether spans between 30.5 days and a year are expressed in months
    pub const fn months(mut self, months: bool) -> Self {
        self.months = months;
        self
    }

    pub const fn minimum_unit(mut self, unit: MinimumUnit) -> Self {
        self.minimum_unit = unit;
        self
    }

    pub fn format(&self, delta: Duration) -> String {
        let total_seconds = delta.as_secs();
        let seconds = total_seconds % SECONDS_PER_DAY;
        let total_days = total_seconds / SECONDS_PER_DAY;
        let years = total_days / DAYS_PER_YEAR;
        let days = total_days % DAYS_PER_YEAR;
        // floor(days / 30.5)
        let num_months = days * 2 / 61;

        if years == 0 && days == 0 {
            return self.format_within_day(seconds, delta.subsec_millis());
        }

        if years == 0 {
            return if days == 1 {
                "a day".to_string()
            } else if !self.months || num_months == 0 {
                counted(days, "day")
            } else if num_months == 1 {
                "a month".to_string()
            } else {
                counted(num_months, "month")
            };
        }

        if years == 1 {
            return if num_months == 0 && days == 0 {
                "a year".to_string()
            } else if num_months == 0 || !self.months {
                format!("1 year, {}", counted(days, "day"))
            } else {
                format!("1 year, {}", counted(num_months, "month"))
            };
        }

        format!("{} years", group_thousands(years))
    }

    fn format_within_day(&self, seconds: u64, millis: u32) -> String {
        match seconds {
            0 => match self.minimum_unit {
                MinimumUnit::Milliseconds => counted(u64::from(millis), "millisecond"),
                MinimumUnit::Seconds => "a moment".to_string(),
            },
            1 => "a second".to_string(),
            2..60 => counted(seconds, "second"),
            60..120 => "a minute".to_string(),
            120..SECONDS_PER_HOUR => counted(seconds / SECONDS_PER_MINUTE, "minute"),
            SECONDS_PER_HOUR..7200 => "an hour".to_string(),
            _ => counted(seconds / SECONDS_PER_HOUR, "hour"),
        }
    }
}

/// Renders `delta` with the default options (months enabled, minimum unit
/// seconds).
pub fn naturaldelta(delta: Duration) -> String {
    NaturalDelta::new().format(delta)
}

fn counted(n: u64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> String {
        NaturalDelta::new()
            .minimum_unit(MinimumUnit::Milliseconds)
            .format(Duration::from_millis(millis))
    }

    fn secs(seconds: u64) -> String {
        naturaldelta(Duration::from_secs(seconds))
    }

    #[test]
    fn test_sub_second_milliseconds() {
        assert_eq!(ms(0), "0 milliseconds");
        assert_eq!(ms(1), "1 millisecond");
        assert_eq!(ms(50), "50 milliseconds");
        assert_eq!(ms(999), "999 milliseconds");
    }

    #[test]
    fn test_sub_second_default_unit() {
        assert_eq!(naturaldelta(Duration::from_millis(400)), "a moment");
    }

    #[test]
    fn test_seconds_and_minutes() {
        assert_eq!(ms(1_000), "a second");
        assert_eq!(ms(1_999), "a second");
        assert_eq!(secs(3), "3 seconds");
        assert_eq!(secs(59), "59 seconds");
        assert_eq!(secs(60), "a minute");
        assert_eq!(secs(119), "a minute");
        assert_eq!(secs(120), "2 minutes");
        assert_eq!(secs(3_599), "59 minutes");
    }

    #[test]
    fn test_hours() {
        assert_eq!(secs(3_600), "an hour");
        assert_eq!(secs(7_199), "an hour");
        assert_eq!(secs(7_200), "2 hours");
        assert_eq!(secs(86_399), "23 hours");
    }

    #[test]
    fn test_days_and_months() {
        let day = SECONDS_PER_DAY;
        assert_eq!(secs(day), "a day");
        assert_eq!(secs(day + 5), "a day");
        assert_eq!(secs(2 * day), "2 days");
        assert_eq!(secs(30 * day), "30 days");
        assert_eq!(secs(31 * day), "a month");
        assert_eq!(secs(92 * day), "3 months");
        assert_eq!(
            NaturalDelta::new()
                .months(false)
                .format(Duration::from_secs(92 * day)),
            "92 days"
        );
    }

    #[test]
    fn test_years() {
        let day = SECONDS_PER_DAY;
        assert_eq!(secs(365 * day), "a year");
        assert_eq!(secs(366 * day), "1 year, 1 day");
        assert_eq!(secs(370 * day), "1 year, 5 days");
        assert_eq!(secs(400 * day), "1 year, 1 month");
        assert_eq!(secs(450 * day), "1 year, 2 months");
        assert_eq!(secs(2 * 365 * day), "2 years");
        assert_eq!(secs(1_000 * 365 * day), "1,000 years");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
