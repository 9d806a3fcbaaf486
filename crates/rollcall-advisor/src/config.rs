//! Advisory client configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.

use std::env;
use std::time::Duration;

/// Advisory-insight client configuration.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    /// Advisory service endpoint (HTTP POST target).
    pub endpoint: String,

    /// Per-request timeout. The advisory call is abandoned best-effort once
    /// this elapses and the fallback message is used instead.
    pub timeout: Duration,
}

impl AdvisorConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let endpoint = env::var("ADVISOR_ENDPOINT")
            .unwrap_or_else(|_| "http://localhost:8780/advice".to_string());

        let timeout_secs: u64 = env::var("ADVISOR_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ADVISOR_TIMEOUT_SECS".to_string()))?;

        Ok(AdvisorConfig {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            endpoint: "http://localhost:8780/advice".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
