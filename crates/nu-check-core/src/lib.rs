// crates/nu-check-core/src/lib.rs
// ============================================================================
// Module: Nu Check Core
// Description: Outcome model, report types, and HTML5 assertion engine.
// Purpose: Provide network-free building blocks for HTML5 conformance checks.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! This crate holds the network-free half of Nu Check: the tri-state
//! assertion outcome, the decoded validator report model, the snippet
//! wrapper template, and the assertion engine that folds validator
//! diagnostics into a single test verdict. Remote I/O lives behind the
//! [`MarkupValidator`] and [`TestClient`] traits so the engine can be
//! exercised against scripted fakes.
//! Invariants:
//! - Every assertion resolves to pass, fail, or incomplete; no error type
//!   escapes to the test runner.
//! - Validator responses are untrusted input and are decoded fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod assertions;
pub mod interfaces;
pub mod outcome;
pub mod report;
pub mod template;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use assertions::Html5Assertions;
pub use assertions::PageError;
pub use interfaces::ClientResponse;
pub use interfaces::MarkupValidator;
pub use interfaces::TestClient;
pub use interfaces::TestClientError;
pub use interfaces::ValidatorError;
pub use outcome::AssertionOutcome;
pub use report::ExclusionRules;
pub use report::MessageKind;
pub use report::ValidationMessage;
pub use report::ValidationReport;
pub use template::SnippetTemplate;
pub use template::TemplateError;
pub use template::CONTENT_PLACEHOLDER;
