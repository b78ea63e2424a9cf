// crates/nu-check-client/src/client.rs
// ============================================================================
// Module: Validator Client
// Description: Blocking client for the remote HTML5 validation service.
// Purpose: Probe availability and submit markup for conformance checking.
// Dependencies: nu-check-core, reqwest, serde_json
// ============================================================================

//! ## Overview
//! [`NuValidatorClient`] speaks the checker wire protocol: a GET probe to
//! detect availability and a form-encoded POST (`out=json`, `parser=html5`,
//! `content=<html>`) whose JSON body decodes into a
//! [`nu_check_core::ValidationReport`]. The probe is memoized explicitly in
//! a [`OnceLock`] instead of running as a constructor side effect, and it
//! never fails a test; any transport-level answer from the service, whatever
//! its HTTP status, counts as available.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::OnceLock;
use std::time::Duration;

use nu_check_core::MarkupValidator;
use nu_check_core::ValidationReport;
use nu_check_core::ValidatorError;
use reqwest::blocking::Client;

use crate::config::ConfigError;
use crate::config::NuClientConfig;

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking client for the remote validation service.
///
/// # Invariants
/// - The availability probe runs at most once per client instance.
/// - Each `check` call issues exactly one POST; nothing is cached.
#[derive(Debug)]
pub struct NuValidatorClient {
    /// Validated client configuration.
    config: NuClientConfig,
    /// Blocking HTTP client with the configured timeout and user agent.
    http: Client,
    /// Memoized result of the availability probe.
    availability: OnceLock<bool>,
}

impl NuValidatorClient {
    /// Creates a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the configuration is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: NuClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| ConfigError::ClientBuild(err.to_string()))?;
        Ok(Self {
            config,
            http,
            availability: OnceLock::new(),
        })
    }

    /// Issues the one-shot GET probe against the endpoint.
    ///
    /// Any response, including an HTTP error status, proves the service is
    /// reachable; only transport failure marks it unavailable.
    fn probe(&self) -> bool {
        self.http.get(&self.config.endpoint).send().is_ok()
    }
}

impl MarkupValidator for NuValidatorClient {
    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn is_available(&self) -> bool {
        *self.availability.get_or_init(|| self.probe())
    }

    fn check(&self, content: &str) -> Result<ValidationReport, ValidatorError> {
        let response = self
            .http
            .post(&self.config.endpoint)
            .form(&[("out", "json"), ("parser", "html5"), ("content", content)])
            .send()
            .map_err(|err| ValidatorError::Unreachable(err.to_string()))?;
        let body = response.text().map_err(|err| ValidatorError::Unreachable(err.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|err| ValidatorError::MalformedResponse(err.to_string()))
    }
}
