// crates/nu-check-core/src/interfaces.rs
// ============================================================================
// Module: Collaborator Interfaces
// Description: Traits for the validator client and the HTTP test client.
// Purpose: Keep the assertion engine free of transport details.
// Dependencies: crate::report, thiserror
// ============================================================================

//! ## Overview
//! The assertion engine composes two collaborators: a [`MarkupValidator`]
//! that speaks to the remote checker and a [`TestClient`] that fetches
//! pages from the application under test. Both are traits so the engine can
//! be driven by scripted fakes in tests. Implementations must not panic;
//! every transport problem maps to a typed error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::report::ValidationReport;

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Validator client errors.
///
/// # Invariants
/// - `Unreachable` means transport failure only; an HTTP error status from
///   the service is still a reachable service.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The validation service could not be reached.
    #[error("validation service unreachable: {0}")]
    Unreachable(String),
    /// The service answered with a body that is not a valid report.
    #[error("validation service returned a malformed response: {0}")]
    MalformedResponse(String),
}

/// Client for a remote HTML5 validation service.
pub trait MarkupValidator {
    /// Returns the resolved service endpoint URL, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Returns true when the service answered a best-effort probe.
    ///
    /// The probe must never fail a test; it only gates whether content
    /// assertions run or report incomplete.
    fn is_available(&self) -> bool;

    /// Submits raw HTML for validation and decodes the JSON report.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError`] when the service is unreachable or the
    /// response body cannot be decoded.
    fn check(&self, content: &str) -> Result<ValidationReport, ValidatorError>;
}

// ============================================================================
// SECTION: Test Client
// ============================================================================

/// Test client errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum TestClientError {
    /// The request could not be delivered to the application under test.
    #[error("request transport failed: {0}")]
    Transport(String),
    /// The request method or URL was rejected before dispatch.
    #[error("invalid request: {0}")]
    Request(String),
}

/// Response captured from the application under test.
///
/// # Invariants
/// - `status` is the raw HTTP status code; `body` is the full response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl ClientResponse {
    /// Returns true when the status is in the successful 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Consumes the response and returns the body text.
    #[must_use]
    pub fn into_content(self) -> String {
        self.body
    }
}

/// HTTP client driving requests against the application under test.
///
/// This is consumed, not implemented, by the assertion engine; the concrete
/// implementation lives with the transport crate.
pub trait TestClient {
    /// Issues a request and captures status plus body text.
    ///
    /// # Errors
    ///
    /// Returns [`TestClientError`] when the method is invalid or the request
    /// cannot be delivered.
    fn request(&self, method: &str, url: &str) -> Result<ClientResponse, TestClientError>;
}
