//! Table-store configuration parsed from environment variables.

use super::types::StoreError;

pub const DEFAULT_STORE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeouts: StoreTimeouts,
}

impl StoreConfig {
    /// Build typed store config from environment variables.
    ///
    /// Required:
    /// - `STORE_URL`: base URL of the table-store REST endpoint
    ///
    /// Optional:
    /// - `STORE_API_KEY_ENV` (names the env var containing the key)
    /// - `STORE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `STORE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_URL` is absent or blank, or if
    /// `STORE_API_KEY_ENV` names an env var that is not set.
    pub fn from_env() -> Result<Self, StoreError> {
        let base_url = std::env::var("STORE_URL")
            .map_err(|_| StoreError::ConfigParse("STORE_URL not set".into()))?
            .trim_end_matches('/')
            .to_string();
        if base_url.is_empty() {
            return Err(StoreError::ConfigParse("STORE_URL is empty".into()));
        }

        let api_key = match std::env::var("STORE_API_KEY_ENV") {
            Ok(key_var) => {
                Some(std::env::var(&key_var).map_err(|_| StoreError::MissingApiKey { var: key_var.clone() })?)
            }
            Err(_) => None,
        };

        let timeouts = StoreTimeouts {
            request_secs: env_parse_u64("STORE_REQUEST_TIMEOUT_SECS", DEFAULT_STORE_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("STORE_CONNECT_TIMEOUT_SECS", DEFAULT_STORE_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { base_url, api_key, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
