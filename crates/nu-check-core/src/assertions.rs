// crates/nu-check-core/src/assertions.rs
// ============================================================================
// Module: HTML5 Assertion Engine
// Description: Folds validator diagnostics into pass/fail/incomplete verdicts.
// Purpose: Provide the conformance assertions driven by functional tests.
// Dependencies: crate::interfaces, crate::outcome, crate::report, serde
// ============================================================================

//! ## Overview
//! [`Html5Assertions`] composes a [`MarkupValidator`] and a [`TestClient`]
//! and exposes the assertion surface: raw-content validation, snippet
//! validation through the wrapper template, AJAX payload validation, and a
//! page-fetch helper. Every path resolves to an [`AssertionOutcome`];
//! validator outages report incomplete, everything else that goes wrong
//! reports a failure with a message naming the violated expectation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use thiserror::Error;

use crate::interfaces::MarkupValidator;
use crate::interfaces::TestClient;
use crate::interfaces::TestClientError;
use crate::interfaces::ValidatorError;
use crate::outcome::AssertionOutcome;
use crate::report::ExclusionRules;
use crate::template::SnippetTemplate;

// ============================================================================
// SECTION: Page Fetch Errors
// ============================================================================

/// Failures while fetching a page from the application under test.
///
/// These concern the application, not the validator, so they map to
/// ordinary assertion failures rather than incomplete outcomes.
#[derive(Debug, Error)]
pub enum PageError {
    /// The test client could not deliver the request.
    #[error("page fetch failed: {0}")]
    Transport(#[from] TestClientError),
    /// The application answered outside the successful 2xx range.
    #[error("expected a successful status for {url}, got {status}")]
    UnexpectedStatus {
        /// Status code the application returned.
        status: u16,
        /// URL that was requested.
        url: String,
    },
}

impl From<PageError> for AssertionOutcome {
    fn from(error: PageError) -> Self {
        Self::Fail(error.to_string())
    }
}

// ============================================================================
// SECTION: AJAX Payload Shape
// ============================================================================

/// Expected shape of an AJAX response payload.
#[derive(Debug, Deserialize)]
struct AjaxEnvelope {
    /// Ordered response fragments; the first one carries the markup.
    #[serde(default)]
    response: Vec<AjaxFragment>,
}

/// One fragment inside an AJAX response payload.
#[derive(Debug, Deserialize)]
struct AjaxFragment {
    /// Embedded HTML payload, when present.
    #[serde(default)]
    html: Option<String>,
}

/// Failure message reported for any malformed AJAX payload.
const INVALID_AJAX_MESSAGE: &str = "Invalid JSON response";

/// Extracts `response[0].html` from an AJAX payload, if the shape holds.
fn extract_ajax_html(payload: &str) -> Option<String> {
    let envelope: AjaxEnvelope = serde_json::from_str(payload).ok()?;
    envelope.response.into_iter().next()?.html
}

// ============================================================================
// SECTION: Assertion Engine
// ============================================================================

/// HTML5 conformance assertions over a validator and a test client.
///
/// # Invariants
/// - No network request is issued when the validator reports unavailable.
/// - Each assertion call issues at most one validation request.
/// - The wrapper template and exclusion rules are per-instance state.
#[derive(Debug)]
pub struct Html5Assertions<V, C> {
    /// Client for the remote validation service.
    validator: V,
    /// Client for the application under test.
    client: C,
    /// Wrapper skeleton used by snippet validation.
    template: SnippetTemplate,
    /// Patterns excluded from the error count.
    exclusions: ExclusionRules,
}

impl<V: MarkupValidator, C: TestClient> Html5Assertions<V, C> {
    /// Creates an engine with the default template and exclusion rules.
    pub fn new(validator: V, client: C) -> Self {
        Self {
            validator,
            client,
            template: SnippetTemplate::default(),
            exclusions: ExclusionRules::default(),
        }
    }

    /// Returns the current wrapper template.
    #[must_use]
    pub const fn template(&self) -> &SnippetTemplate {
        &self.template
    }

    /// Replaces the wrapper template used by snippet validation.
    pub fn set_template(&mut self, template: SnippetTemplate) {
        self.template = template;
    }

    /// Replaces the exclusion rules applied to validator error rows.
    pub fn set_exclusions(&mut self, exclusions: ExclusionRules) {
        self.exclusions = exclusions;
    }

    /// Asserts that a full HTML document is valid HTML5.
    ///
    /// Reports incomplete when the validation service is unavailable, a
    /// failure listing one `Line <N>: <message>` row per conformance error
    /// otherwise, and a pass when no qualifying errors remain.
    #[must_use]
    pub fn assert_is_valid_html5(
        &self,
        content: &str,
        context: Option<&str>,
    ) -> AssertionOutcome {
        if !self.validator.is_available() {
            return AssertionOutcome::Incomplete(format!(
                "validation service {} is not available",
                self.validator.endpoint()
            ));
        }
        let report = match self.validator.check(content) {
            Ok(report) => report,
            Err(ValidatorError::Unreachable(reason)) => {
                return AssertionOutcome::Incomplete(format!(
                    "validation service {} became unreachable: {reason}",
                    self.validator.endpoint()
                ));
            }
            Err(error @ ValidatorError::MalformedResponse(_)) => {
                return AssertionOutcome::Fail(error.to_string());
            }
        };
        let errors = report.conformance_errors(&self.exclusions);
        if errors.is_empty() {
            return AssertionOutcome::Pass;
        }
        let mut message = String::new();
        if let Some(context) = context {
            message.push_str(context);
            message.push('\n');
        }
        for error in errors {
            let line = error.last_line.unwrap_or(0);
            message.push_str(&format!("Line {line}: {}\n", error.message));
        }
        AssertionOutcome::Fail(message.trim_end().to_string())
    }

    /// Asserts that a markup snippet is valid HTML5 once wrapped into the
    /// instance template.
    #[must_use]
    pub fn assert_is_valid_html5_snippet(
        &self,
        snippet: &str,
        context: Option<&str>,
    ) -> AssertionOutcome {
        let document = self.template.wrap(snippet);
        self.assert_is_valid_html5(&document, context)
    }

    /// Asserts that the HTML embedded in an AJAX response payload is valid
    /// HTML5.
    ///
    /// The payload must decode as `{ "response": [ { "html": ... } ] }`;
    /// any shape violation fails immediately with `Invalid JSON response`.
    #[must_use]
    pub fn assert_is_valid_html5_ajax_response(
        &self,
        payload: &str,
        context: Option<&str>,
    ) -> AssertionOutcome {
        match extract_ajax_html(payload) {
            Some(html) => self.assert_is_valid_html5_snippet(&html, context),
            None => AssertionOutcome::Fail(INVALID_AJAX_MESSAGE.to_string()),
        }
    }

    /// Fetches a page with GET and asserts a successful status.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] when the request cannot be delivered or the
    /// status is outside the 2xx range; callers report it as an ordinary
    /// assertion failure via `From<PageError> for AssertionOutcome`.
    pub fn get_page(&self, url: &str) -> Result<String, PageError> {
        self.fetch_page("GET", url)
    }

    /// Fetches a page with an explicit method and asserts a successful
    /// status.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] when the request cannot be delivered or the
    /// status is outside the 2xx range.
    pub fn fetch_page(&self, method: &str, url: &str) -> Result<String, PageError> {
        let response = self.client.request(method, url)?;
        if !response.is_success() {
            return Err(PageError::UnexpectedStatus {
                status: response.status,
                url: url.to_string(),
            });
        }
        Ok(response.into_content())
    }
}
