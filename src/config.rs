//! Stopwatch configuration
//!
//! Precision can come from code, the `STOPWATCH_PRECISION` environment
//! variable, or a TOML file when the `toml-config` feature is enabled.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

use crate::clock::Clock;
use crate::error::Result;
use crate::precision::Precision;
use crate::stopwatch::Stopwatch;

pub const PRECISION_ENV: &str = "STOPWATCH_PRECISION";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwatchConfig {
    /// Fractional digits kept when rounding durations (default 2)
    pub precision: Precision,
}

impl StopwatchConfig {
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }

    /// Load configuration from environment variables, falling back to the
    /// defaults for anything invalid
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Load configuration from environment variables, rejecting invalid values
    pub fn try_from_env() -> Result<Self> {
        Self::try_from_lookup(env_var)
    }

    /// Merge with environment variables (env vars take precedence)
    pub fn merge_with_env(self) -> Self {
        self.merge_with_lookup(env_var)
    }

    /// Load configuration from TOML file
    #[cfg(feature = "toml-config")]
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from TOML file (stub when toml feature is disabled)
    #[cfg(not(feature = "toml-config"))]
    pub fn from_file(_path: &Path) -> anyhow::Result<Self> {
        anyhow::bail!("TOML support not enabled. Enable the 'toml-config' feature.")
    }

    /// Save configuration to TOML file
    #[cfg(feature = "toml-config")]
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        use anyhow::Context;

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Save configuration to TOML file (stub when toml feature is disabled)
    #[cfg(not(feature = "toml-config"))]
    pub fn save_to_file(&self, _path: &Path) -> anyhow::Result<()> {
        anyhow::bail!("TOML support not enabled. Enable the 'toml-config' feature.")
    }

    /// Starts a stopwatch on the monotonic clock.
    pub fn build(&self) -> Stopwatch {
        Stopwatch::new(self.precision)
    }

    pub fn build_with_clock<C: Clock>(&self, clock: C) -> Stopwatch<C> {
        Stopwatch::with_clock(self.precision, clock)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::default().merge_with_lookup(lookup)
    }

    fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(PRECISION_ENV) {
            config.precision = value.parse()?;
        }
        Ok(config)
    }

    fn merge_with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(PRECISION_ENV) {
            match value.parse() {
                Ok(precision) => self.precision = precision,
                Err(err) => {
                    warn!(error = %err, var = PRECISION_ENV, "ignoring invalid precision");
                }
            }
        }
        self
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
