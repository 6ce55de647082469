use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_attempt_timeout_ms() -> u64 {
    8000
}

fn default_user_agent() -> String {
    concat!("lexa/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings shared by every outbound provider call
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Upper bound for a single provider attempt
    #[serde(default = "default_attempt_timeout_ms")]
    pub attempt_timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            attempt_timeout_ms: default_attempt_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    pub fn new() -> Self {
        let attempt_timeout_ms = env::var("LEXA_ATTEMPT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_attempt_timeout_ms);

        Self {
            attempt_timeout_ms,
            ..Self::default()
        }
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}
