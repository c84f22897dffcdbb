//! Configuration management for the contact form.
//!
//! Loads settings from environment variables, reading an optional `.env`
//! file first. Nothing here writes to stdout, which is reserved for the
//! rendered form.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Endpoint the form posts to when none is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://my-json-server.typicode.com/JustUtahCoders/interview-users-api/users";

/// How long the success banner stays visible by default.
pub const DEFAULT_SUCCESS_BANNER_MS: u64 = 4000;

/// Configuration for the contact form.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the contact details are POSTed to
    pub endpoint_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Success banner lifetime in milliseconds (default: 4000)
    pub success_banner_ms: u64,

    /// Clear the fields after an accepted submission (default: false)
    pub clear_on_success: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CONTACT_FORM_ENDPOINT`: submission URL (default: [`DEFAULT_ENDPOINT`])
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `SUCCESS_BANNER_MS`: banner lifetime in milliseconds (default: 4000)
    /// - `CONTACT_FORM_CLEAR_ON_SUCCESS`: `true` or `false` (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let endpoint_url =
            env::var("CONTACT_FORM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_FORM_ENDPOINT".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let success_banner_ms =
            Self::parse_env_u64("SUCCESS_BANNER_MS", DEFAULT_SUCCESS_BANNER_MS)?;

        if success_banner_ms == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SUCCESS_BANNER_MS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let clear_on_success = Self::parse_env_bool("CONTACT_FORM_CLEAR_ON_SUCCESS", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            endpoint_url,
            request_timeout,
            success_banner_ms,
            clear_on_success,
            log_level,
        })
    }

    /// Banner lifetime as a `Duration`.
    pub fn success_banner_duration(&self) -> Duration {
        Duration::from_millis(self.success_banner_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            request_timeout: 10,
            success_banner_ms: DEFAULT_SUCCESS_BANNER_MS,
            clear_on_success: false,
            log_level: "error".to_string(),
        }
    }
}
