use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset. At `info` only warnings from
/// the config layer (an ignored `STOPWATCH_PRECISION`) are shown; stopwatch
/// transitions need `stopwatch=trace`.
pub const DEFAULT_FILTER: &str = "stopwatch=info";

/// Install a tracing subscriber once per process.
///
/// Does nothing if another global subscriber was installed first.
pub fn init_logging() {
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .compact()
            .try_init();
    });
}
