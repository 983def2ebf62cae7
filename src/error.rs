use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StopwatchError>;

/// Configuration errors surfaced when a stopwatch is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StopwatchError {
    #[error("invalid precision {value}: must be a non-negative number of digits")]
    InvalidPrecision { value: i64 },

    #[error("failed to parse precision from `{input}`")]
    ParsePrecision {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
