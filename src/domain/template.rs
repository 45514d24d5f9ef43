//! FormatTemplate
//!
//! A merchant template such as `"${{amount}} USD"`: literal text around a
//! single `{{ word }}` placeholder naming a [`FormatMode`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use super::error::FormatError;
use super::mode::FormatMode;

/// Template used when nothing else was configured
pub const FALLBACK_TEMPLATE: &str = "${{amount}}";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("placeholder pattern is valid"));

/// A validated template.
///
/// Only the first placeholder is significant; any later `{{ ... }}` text
/// is kept verbatim in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FormatTemplate {
    raw: String,
    /// byte range of the whole `{{ word }}` token in `raw`
    placeholder: Range<usize>,
    mode: FormatMode,
}

impl FormatTemplate {
    /// Parse a template, locating its placeholder and resolving the mode.
    ///
    /// # Errors
    /// - `FormatError::MalformedTemplate` if there is no placeholder
    /// - `FormatError::UnrecognizedMode` if the placeholder word is unknown
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let captures = PLACEHOLDER
            .captures(template)
            .ok_or_else(|| FormatError::malformed(template))?;
        let (Some(token), Some(word)) = (captures.get(0), captures.get(1)) else {
            return Err(FormatError::malformed(template));
        };
        let mode = word.as_str().parse::<FormatMode>()?;

        Ok(Self {
            raw: template.to_string(),
            placeholder: token.range(),
            mode,
        })
    }

    /// The `"${{amount}}"` template
    pub fn fallback() -> Self {
        Self {
            raw: FALLBACK_TEMPLATE.to_string(),
            placeholder: 1..FALLBACK_TEMPLATE.len(),
            mode: FormatMode::Amount,
        }
    }

    pub fn mode(&self) -> FormatMode {
        self.mode
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute `value` for the placeholder token, braces included.
    pub fn render(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.raw.len() + value.len());
        out.push_str(&self.raw[..self.placeholder.start]);
        out.push_str(value);
        out.push_str(&self.raw[self.placeholder.end..]);
        out
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for FormatTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FormatTemplate {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FormatTemplate {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FormatTemplate> for String {
    fn from(template: FormatTemplate) -> Self {
        template.raw
    }
}
