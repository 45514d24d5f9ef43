//! Shop settings
//!
//! The slice of merchant settings the formatter consumes, as exported by
//! the storefront at page-load time.

use serde::{Deserialize, Serialize};

use crate::domain::{FormatError, FormatTemplate};

/// Money-related shop settings.
///
/// Templates are kept as raw strings here; they are validated when a
/// formatter is built from them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSettings {
    /// Template for plain prices, e.g. `"${{amount}}"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_format: Option<String>,

    /// Template for prices shown with a currency code, e.g. `"${{amount}} USD"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_with_currency_format: Option<String>,

    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ShopSettings {
    /// Parse settings from a JSON document. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validated `money_format`, if set
    pub fn money_template(&self) -> Result<Option<FormatTemplate>, FormatError> {
        self.money_format.as_deref().map(FormatTemplate::parse).transpose()
    }

    /// Validated `money_with_currency_format`, if set
    pub fn money_with_currency_template(&self) -> Result<Option<FormatTemplate>, FormatError> {
        self.money_with_currency_format
            .as_deref()
            .map(FormatTemplate::parse)
            .transpose()
    }
}
