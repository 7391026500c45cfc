//! Error types for the scenario harness
//!
//! Messages name the scenario condition that failed so a broken run can be
//! diagnosed from the output alone, without re-running under a debugger.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the scenario harness
#[derive(Error, Debug)]
pub enum Error {
    // === Driver Process Errors ===
    #[error("WebDriver binary '{name}' not found. Searched: {searched}")]
    DriverNotFound { name: String, searched: String },

    #[error("WebDriver process failed to start: {0}")]
    DriverStartFailed(String),

    #[error("WebDriver did not answer status checks within {0} seconds")]
    DriverStartupTimeout(u64),

    // === Session Errors ===
    #[error("WebDriver session error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("Cannot build a file URL for page '{0}'")]
    InvalidPagePath(String),

    // === Scenario Errors ===
    #[error("Timed out after {timeout_secs}s waiting for {condition}")]
    WaitTimeout { condition: String, timeout_secs: u64 },

    #[error("Assertion failed: {0}")]
    Assertion(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a driver not found error with search paths
    pub fn driver_not_found<S: AsRef<str>>(name: &str, paths: &[S]) -> Self {
        Self::DriverNotFound {
            name: name.to_string(),
            searched: paths.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", "),
        }
    }

    /// Create a wait timeout error naming the polled condition
    pub fn wait_timeout(condition: &str, timeout_secs: u64) -> Self {
        Self::WaitTimeout {
            condition: condition.to_string(),
            timeout_secs,
        }
    }

    /// Create an assertion failure
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }
}
