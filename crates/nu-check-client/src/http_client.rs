// crates/nu-check-client/src/http_client.rs
// ============================================================================
// Module: HTTP Test Client
// Description: Base-URL-anchored client for the application under test.
// Purpose: Implement the core test-client trait over blocking reqwest.
// Dependencies: nu-check-core, reqwest, url
// ============================================================================

//! ## Overview
//! [`HttpTestClient`] drives requests against the application under test:
//! relative URLs are joined onto a base URL, the method string is parsed
//! into a real HTTP method, and status plus body text are captured into a
//! [`nu_check_core::ClientResponse`]. Failures here concern the application,
//! not the validator, so callers report them as ordinary assertion failures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use nu_check_core::ClientResponse;
use nu_check_core::TestClient;
use nu_check_core::TestClientError;
use reqwest::Method;
use reqwest::blocking::Client;
use url::Url;

// ============================================================================
// SECTION: Client
// ============================================================================

/// Default request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Blocking HTTP client anchored at the application's base URL.
///
/// # Invariants
/// - `base` is an absolute URL; relative request URLs are joined onto it.
/// - Each request is a single blocking round trip with the configured
///   timeout.
#[derive(Debug)]
pub struct HttpTestClient {
    /// Base URL of the application under test.
    base: Url,
    /// Blocking HTTP client.
    http: Client,
}

impl HttpTestClient {
    /// Creates a client with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TestClientError`] when the base URL is not absolute or the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, TestClientError> {
        Self::with_timeout(base_url, Duration::from_millis(DEFAULT_TIMEOUT_MS))
    }

    /// Creates a client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TestClientError`] when the base URL is not absolute or the
    /// HTTP client cannot be constructed.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, TestClientError> {
        let base = Url::parse(base_url)
            .map_err(|_| TestClientError::Request(format!("invalid base url: {base_url}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TestClientError::Transport(err.to_string()))?;
        Ok(Self {
            base,
            http,
        })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }
}

impl TestClient for HttpTestClient {
    fn request(&self, method: &str, url: &str) -> Result<ClientResponse, TestClientError> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| TestClientError::Request(format!("invalid method: {method}")))?;
        let target = self
            .base
            .join(url)
            .map_err(|_| TestClientError::Request(format!("invalid request url: {url}")))?;
        let response = self
            .http
            .request(method, target)
            .send()
            .map_err(|err| TestClientError::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|err| TestClientError::Transport(err.to_string()))?;
        Ok(ClientResponse {
            status,
            body,
        })
    }
}
