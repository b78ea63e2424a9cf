// crates/nu-check-client/src/config.rs
// ============================================================================
// Module: Validator Client Configuration
// Description: Typed configuration for the validation service client.
// Purpose: Resolve and validate the endpoint, timeout, and user agent.
// Dependencies: serde, toml, url
// ============================================================================

//! ## Overview
//! Configuration for [`crate::NuValidatorClient`]. Values come from test
//! configuration (TOML) or from `Default`, and are validated fail-closed:
//! the endpoint must be an absolute http(s) URL and the timeout must be
//! non-zero. The original helper had no timeout beyond client defaults;
//! here it is an explicit, configurable bound.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("configuration parse failed: {0}")]
    Parse(String),
    /// The endpoint is not an absolute http(s) URL.
    #[error("invalid validation endpoint: {0}")]
    InvalidEndpoint(String),
    /// The request timeout is zero.
    #[error("timeout_ms must be non-zero")]
    InvalidTimeout,
    /// The underlying HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
}

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the validation service client.
///
/// # Invariants
/// - `endpoint` is an absolute http(s) URL once validated.
/// - `timeout_ms` is non-zero and applies to the full request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NuClientConfig {
    /// Validation service endpoint URL.
    pub endpoint: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
}

impl Default for NuClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://validator.nu/".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: "nu-check/0.1".to_string(),
        }
    }
}

impl NuClientConfig {
    /// Parses configuration from a TOML document and validates it.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document does not parse or the
    /// resolved values are invalid.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the endpoint is not an absolute http(s)
    /// URL or the timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|_| ConfigError::InvalidEndpoint(self.endpoint.clone()))?;
        match url.scheme() {
            "http" | "https" => {}
            _ => return Err(ConfigError::InvalidEndpoint(self.endpoint.clone())),
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}
