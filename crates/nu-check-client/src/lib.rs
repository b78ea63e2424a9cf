// crates/nu-check-client/src/lib.rs
// ============================================================================
// Module: Nu Check Client
// Description: Blocking HTTP implementations of the Nu Check collaborators.
// Purpose: Provide the validator client and the application test client.
// Dependencies: nu-check-core, reqwest, serde, toml, url
// ============================================================================

//! ## Overview
//! This crate ships the transport half of Nu Check: a blocking
//! [`NuValidatorClient`] speaking the checker wire protocol (form-encoded
//! POST, JSON diagnostics back) and a base-URL-anchored [`HttpTestClient`]
//! implementing the core test-client trait. Both enforce a configurable
//! request timeout and map every transport problem to a typed error.
//! Invariants:
//! - The availability probe runs at most once per validator client.
//! - Each `check` call issues exactly one blocking POST; results are not
//!   cached across calls.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod http_client;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::NuValidatorClient;
pub use config::ConfigError;
pub use config::NuClientConfig;
pub use http_client::HttpTestClient;
