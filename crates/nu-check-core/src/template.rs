// crates/nu-check-core/src/template.rs
// ============================================================================
// Module: Snippet Template
// Description: HTML5 document skeleton used to wrap markup snippets.
// Purpose: Embed fragments into a minimal valid document before validation.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A snippet is a markup fragment without a document wrapper. Before it can
//! be validated it is embedded into a minimal HTML5 skeleton by replacing
//! the first occurrence of the `<<CONTENT>>` placeholder. Substitution is
//! literal and single-shot: a snippet that itself contains the placeholder
//! token is embedded verbatim, never expanded a second time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

// ============================================================================
// SECTION: Placeholder and Default Skeleton
// ============================================================================

/// Placeholder token replaced by the snippet.
pub const CONTENT_PLACEHOLDER: &str = "<<CONTENT>>";

/// Canonical minimal HTML5 document skeleton.
const DEFAULT_SKELETON: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<title>Snippet</title>\n\
</head>\n\
<body>\n\
<<CONTENT>>\n\
</body>\n\
</html>\n";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Template construction errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The supplied skeleton does not contain the placeholder token.
    #[error("template does not contain the {CONTENT_PLACEHOLDER} placeholder")]
    MissingPlaceholder,
}

// ============================================================================
// SECTION: Template
// ============================================================================

/// HTML5 document skeleton holding exactly the substitution contract above.
///
/// # Invariants
/// - The skeleton always contains at least one placeholder occurrence.
/// - `wrap` replaces only the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetTemplate {
    /// Skeleton text containing the placeholder token.
    skeleton: String,
}

impl Default for SnippetTemplate {
    fn default() -> Self {
        Self {
            skeleton: DEFAULT_SKELETON.to_string(),
        }
    }
}

impl SnippetTemplate {
    /// Creates a template from a caller-supplied skeleton.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingPlaceholder`] when the skeleton lacks
    /// the placeholder token.
    pub fn new(skeleton: impl Into<String>) -> Result<Self, TemplateError> {
        let skeleton = skeleton.into();
        if !skeleton.contains(CONTENT_PLACEHOLDER) {
            return Err(TemplateError::MissingPlaceholder);
        }
        Ok(Self {
            skeleton,
        })
    }

    /// Returns the skeleton text.
    #[must_use]
    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    /// Embeds the snippet by replacing the first placeholder occurrence.
    #[must_use]
    pub fn wrap(&self, snippet: &str) -> String {
        self.skeleton.replacen(CONTENT_PLACEHOLDER, snippet, 1)
    }
}
