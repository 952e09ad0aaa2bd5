//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the academy
//! schedule API server. Values come from environment variables, with
//! defaults for everything.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `SCHEDULE_MAX_INPUT_CHARS`: Longest schedule text accepted (default: 4000)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Default upper bound on the schedule text a single request may submit.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 4000;

/// Configuration for the academy schedule API server
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use academy_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Longest schedule text, in characters, a request may submit
    pub max_input_chars: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: Level::INFO,
            cors_origins: None,
            request_timeout: 30,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - The SCHEDULE_MAX_INPUT_CHARS value is not a positive number
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        // Network settings
        let host = env::var("API_HOST").unwrap_or(defaults.host);
        let port = match env::var("API_PORT") {
            Ok(port) => port.parse().wrap_err("Invalid API_PORT value")?,
            Err(_) => defaults.port,
        };

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default());

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(defaults.request_timeout);

        // Extraction limits
        let max_input_chars = match env::var("SCHEDULE_MAX_INPUT_CHARS") {
            Ok(value) => {
                let parsed: usize = value
                    .parse()
                    .wrap_err("Invalid SCHEDULE_MAX_INPUT_CHARS value")?;
                eyre::ensure!(parsed > 0, "SCHEDULE_MAX_INPUT_CHARS must be positive");
                parsed
            }
            Err(_) => defaults.max_input_chars,
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            max_input_chars,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Maps a `LOG_LEVEL` value to a tracing level, defaulting to INFO.
pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
