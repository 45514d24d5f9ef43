//! Domain Error Types
//!
//! Pure formatting errors that don't depend on configuration or I/O.

use thiserror::Error;

/// Template usage errors
///
/// Both variants are configuration mistakes made by whoever wrote the
/// template. Bad amounts are never reported here: they render as zero.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Template has no `{{ word }}` placeholder
    #[error("Malformed money template (no {{{{ placeholder }}}} found): {0:?}")]
    MalformedTemplate(String),

    /// Placeholder word names none of the known format modes
    #[error("Unrecognized money format mode: {0:?}")]
    UnrecognizedMode(String),
}

impl FormatError {
    /// Create a malformed template error
    pub fn malformed(template: impl Into<String>) -> Self {
        Self::MalformedTemplate(template.into())
    }

    /// Create an unrecognized mode error
    pub fn unrecognized(word: impl Into<String>) -> Self {
        Self::UnrecognizedMode(word.into())
    }

    /// Check if the template itself could not be understood
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedTemplate(_))
    }

    /// Check if the placeholder was found but named an unknown mode
    pub fn is_unrecognized_mode(&self) -> bool {
        matches!(self, Self::UnrecognizedMode(_))
    }
}
