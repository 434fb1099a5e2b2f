//! Environment-driven host configuration.
//!
//! Three knobs, all optional: the backend override (the build-time variable
//! of the deployed client), the hostname the client is considered to be
//! served from, and the request timeout. Assembly from raw values is kept
//! separate from `std::env` so precedence is testable without mutating
//! process state.

use std::time::Duration;

use tracing::warn;

/// Overrides the resolved backend base URL when set and non-empty.
pub const API_BASE_VAR: &str = "TOPLIST_API_BASE";

/// Stand-in for the hostname a browser client would read from its location.
pub const HOSTNAME_VAR: &str = "TOPLIST_HOSTNAME";

/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "TOPLIST_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Option<String>,
    pub hostname: String,
    pub timeout: Duration,
}

impl Config {
    pub fn load() -> Self {
        Self::from_values(
            std::env::var(API_BASE_VAR).ok(),
            std::env::var(HOSTNAME_VAR).ok(),
            std::env::var(TIMEOUT_VAR).ok(),
        )
    }

    /// Assemble a config from raw variable values.
    pub fn from_values(
        api_base: Option<String>,
        hostname: Option<String>,
        timeout_secs: Option<String>,
    ) -> Self {
        Self {
            api_base,
            hostname: hostname
                .unwrap_or_else(|| toplist_core::endpoint::DEV_HOSTNAME.to_string()),
            timeout: parse_timeout(timeout_secs),
        }
    }
}

fn parse_timeout(raw: Option<String>) -> Duration {
    let secs = match raw {
        None => DEFAULT_TIMEOUT_SECS,
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("invalid {TIMEOUT_VAR} value: {e}, using default");
            DEFAULT_TIMEOUT_SECS
        }),
    };
    Duration::from_secs(secs)
}
