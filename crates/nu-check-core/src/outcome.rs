// crates/nu-check-core/src/outcome.rs
// ============================================================================
// Module: Assertion Outcome
// Description: Tri-state verdict produced by HTML5 conformance assertions.
// Purpose: Keep pass, fail, and incomplete as a closed set of terminal states.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Defines the tri-state verdict every assertion in this crate resolves to.
//! `Incomplete` is distinct from failure: it records that the validation
//! service could not be reached, so the check proved nothing about the
//! content under test.

use std::fmt;

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Terminal verdict of a single HTML5 conformance assertion.
///
/// # Invariants
/// - Represents a closed set of outcomes: pass, fail, or incomplete.
/// - `Fail` and `Incomplete` always carry a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertionOutcome {
    /// The content passed validation.
    Pass,
    /// The content failed validation; the message lists each conformance
    /// error as a `Line <N>: <message>` row.
    Fail(String),
    /// The validation service was unreachable; the assertion proved nothing.
    Incomplete(String),
}

impl AssertionOutcome {
    /// Returns true if the outcome is `Pass`.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if the outcome is `Fail`.
    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// Returns true if the outcome is `Incomplete`.
    #[must_use]
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete(_))
    }

    /// Returns the failure or incompleteness message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) | Self::Incomplete(message) => Some(message.as_str()),
        }
    }
}

impl fmt::Display for AssertionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail(message) => write!(f, "fail: {message}"),
            Self::Incomplete(reason) => write!(f, "incomplete: {reason}"),
        }
    }
}
