//! Client configuration.
//!
//! Values are baked in at build time from environment variables, since a browser bundle has no
//! process environment:
//!
//! - `SALESBOARD_API_URL` - origin of the API, e.g. `https://api.example.com`. Empty or unset
//!   means the API is served from the same origin as the dashboard.
//! - `SALESBOARD_REQUEST_TIMEOUT_SECS` - per-request timeout in seconds, default 15.

use std::time::Duration;

use crate::client::{error::ConfigError, validation};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

const API_URL_VAR: &str = "SALESBOARD_API_URL";
const REQUEST_TIMEOUT_VAR: &str = "SALESBOARD_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Prefix for every API path, without a trailing slash.
    pub api_base_url: &'static str,
    /// Upper bound on the duration of one request.
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "",
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads the configuration captured at build time.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SALESBOARD_API_URL"),
            option_env!("SALESBOARD_REQUEST_TIMEOUT_SECS"),
        )
    }

    /// Builds the configuration from raw variable values, `None` meaning unset.
    pub fn from_values(
        api_base_url: Option<&'static str>,
        request_timeout_secs: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_base_url = api_base_url.unwrap_or("").trim().trim_end_matches('/');
        if !api_base_url.is_empty() && !validation::is_http_url(api_base_url) {
            return Err(ConfigError::InvalidEnvValue {
                var: API_URL_VAR.to_string(),
                reason: format!("expected an http(s) URL, got {:?}", api_base_url),
            });
        }

        let request_timeout = match request_timeout_secs.map(str::trim) {
            None | Some("") => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: REQUEST_TIMEOUT_VAR.to_string(),
                        reason: format!("expected a positive number of seconds, got {:?}", raw),
                    })
                }
            },
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }

    /// Absolute or same-origin URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
