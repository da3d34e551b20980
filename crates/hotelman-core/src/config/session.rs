//! Session cache configuration.

use serde::{Deserialize, Serialize};

/// Session cache and cookie transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Name of the HttpOnly cookie carrying the bearer token.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Interval between expired-session sweeps, in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_seconds: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            sweep_interval_seconds: default_sweep_interval(),
        }
    }
}

fn default_cookie_name() -> String {
    "hotelman_session".to_string()
}

fn default_sweep_interval() -> u64 {
    300
}
