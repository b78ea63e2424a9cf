// crates/nu-check-core/src/report.rs
// ============================================================================
// Module: Validation Report
// Description: Decoded message rows returned by the validation service.
// Purpose: Model the checker's JSON diagnostics and the error filter.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The validation service answers with `{ "messages": [ ... ] }` where each
//! row carries a `type`, a `message`, and, for errors, a `lastLine` number.
//! Only rows of kind `error` count toward a failed assertion; rows matching
//! a configured exclusion pattern are dropped from both the count and the
//! failure message. Report bodies are untrusted input and are decoded
//! fail-closed by the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;

// ============================================================================
// SECTION: Message Rows
// ============================================================================

/// Kind of a single validator message row.
///
/// # Invariants
/// - Unrecognized kinds decode as `Other` instead of failing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// A conformance error; counts toward assertion failure.
    Error,
    /// An informational note; ignored by assertions.
    Info,
    /// Any other row kind the service may emit.
    #[serde(other)]
    Other,
}

/// One diagnostic row from the validation service.
///
/// # Invariants
/// - `last_line` is present on error rows emitted by the checker; rows
///   without it render as line 0 in failure messages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationMessage {
    /// Row kind as reported by the service.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Human-readable diagnostic text.
    pub message: String,
    /// Line number the diagnostic ends on, when the service provides one.
    #[serde(rename = "lastLine", default)]
    pub last_line: Option<u64>,
}

/// Decoded JSON response from the validation service.
///
/// # Invariants
/// - Row order is the order the service reported; assertions preserve it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ValidationReport {
    /// Ordered diagnostic rows.
    #[serde(default)]
    pub messages: Vec<ValidationMessage>,
}

impl ValidationReport {
    /// Returns the error rows that survive the exclusion filter, in order.
    #[must_use]
    pub fn conformance_errors(&self, exclusions: &ExclusionRules) -> Vec<&ValidationMessage> {
        self.messages
            .iter()
            .filter(|row| row.kind == MessageKind::Error)
            .filter(|row| !exclusions.excludes(&row.message))
            .collect()
    }
}

// ============================================================================
// SECTION: Exclusion Rules
// ============================================================================

/// Substring pattern the Facebook login widget triggers in the checker.
///
/// The `fb:login-button` element is not valid HTML5, but the checker flags
/// it even inside ignorable namespaced markup. Excluding it is a documented
/// workaround for that single false positive.
const FB_LOGIN_BUTTON_PATTERN: &str = "fb:login-button";

/// Ordered substring patterns excluded from the error count.
///
/// # Invariants
/// - Matching is plain substring containment against the row message.
/// - The default set contains only the known `fb:login-button` pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExclusionRules {
    /// Substring patterns; a row matching any pattern is excluded.
    pub patterns: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            patterns: vec![FB_LOGIN_BUTTON_PATTERN.to_string()],
        }
    }
}

impl ExclusionRules {
    /// Creates rules with no patterns; every error row counts.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Returns true if the message matches any exclusion pattern.
    #[must_use]
    pub fn excludes(&self, message: &str) -> bool {
        self.patterns.iter().any(|pattern| message.contains(pattern.as_str()))
    }
}
