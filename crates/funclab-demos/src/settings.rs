//! # Demo Settings
//!
//! The demos take no arguments. The resource delay can still be tuned from
//! the environment; everything else is hard-coded.
//!
//! ## Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults                                                            │
//! │     resource delay 100 ms                                               │
//! │                                                                         │
//! │  2. Environment                                                         │
//! │     FUNCLAB_RESOURCE_DELAY_MS=0                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The log filter (`RUST_LOG`, then `FUNCLAB_LOG`) is read by
//! [`crate::init_tracing`] before settings load, so that rejected values
//! here are actually reported.

use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable holding the simulated resource delay.
pub const RESOURCE_DELAY_VAR: &str = "FUNCLAB_RESOURCE_DELAY_MS";

const DEFAULT_RESOURCE_DELAY_MS: u64 = 100;

/// A rejected environment value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{var} must be a whole number of milliseconds, got '{value}'")]
    InvalidDelay { var: String, value: String },
}

/// Runtime knobs for the demo binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    /// Illustrative pause while a resource is "processed".
    pub resource_delay: Duration,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            resource_delay: Duration::from_millis(DEFAULT_RESOURCE_DELAY_MS),
        }
    }
}

impl DemoSettings {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(value) = lookup(RESOURCE_DELAY_VAR) {
            match parse_delay(&value) {
                Ok(delay) => {
                    debug!(?delay, "Overriding resource delay from environment");
                    settings.resource_delay = delay;
                }
                Err(e) => warn!("{}. Using default.", e),
            }
        }

        settings
    }
}

fn parse_delay(value: &str) -> Result<Duration, SettingsError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| SettingsError::InvalidDelay {
            var: RESOURCE_DELAY_VAR.to_string(),
            value: value.to_string(),
        })
}
