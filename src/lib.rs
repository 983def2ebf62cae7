//! Monotonic stopwatch for diagnostic timing.
//!
//! ```
//! use stopwatch::{Precision, Stopwatch};
//!
//! let mut stopwatch = Stopwatch::new(Precision::DEFAULT);
//! assert!(stopwatch.is_running());
//!
//! stopwatch.stop();
//! let frozen = stopwatch.duration();
//! assert_eq!(stopwatch.duration(), frozen);
//!
//! stopwatch.reset();
//! assert_eq!(stopwatch.duration(), 0);
//! assert!(stopwatch.start().is_running());
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod logger;
pub mod precision;
pub mod stopwatch;

pub use crate::clock::{Clock, ManualClock, MonotonicClock};
pub use crate::config::StopwatchConfig;
pub use crate::error::{Result, StopwatchError};
pub use crate::logger::init_logging;
pub use crate::precision::Precision;
pub use crate::stopwatch::Stopwatch;
