//! Error types for feature binding and handler execution.
//!
//! None of these are fatal to the page. `app::init` logs every binding
//! failure and moves on to the next feature.

/// Name of one of the five page features.
pub type Feature = &'static str;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Required marker elements are absent; the feature is skipped.
    #[error("{feature}: elements not found: {}", .missing.join(", "))]
    MissingElements { feature: Feature, missing: Vec<&'static str> },

    /// Reading content out of a clicked element failed.
    #[error("{feature}: extraction failed: {reason}")]
    Extraction { feature: Feature, reason: String },

    /// A nav link's text matched no page section.
    #[error("no page matched for nav link text: {target}")]
    NoPageMatch { target: String },

    /// The host rejected a DOM call.
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl BindError {
    /// Missing-element errors are the expected outcome on pages that omit a feature.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingElements { .. })
    }
}

/// Build a [`BindError::MissingElements`] from `(selector, found)` pairs.
pub fn missing(feature: Feature, checks: &[(&'static str, bool)]) -> BindError {
    let missing = checks.iter().filter(|(_, found)| !found).map(|(sel, _)| *sel).collect();
    BindError::MissingElements { feature, missing }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
