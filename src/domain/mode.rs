//! FormatMode
//!
//! The four rendering styles a placeholder word can name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::FormatError;

/// Rendering style selected by the placeholder word.
///
/// | mode                                      | precision | thousands | decimal |
/// |-------------------------------------------|-----------|-----------|---------|
/// | `amount`                                  | 2         | `,`       | `.`     |
/// | `amount_no_decimals`                      | 0         | `,`       | `.`     |
/// | `amount_with_comma_separator`             | 2         | `.`       | `,`     |
/// | `amount_no_decimals_with_comma_separator` | 0         | `.`       | `,`     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatMode {
    Amount,
    AmountNoDecimals,
    AmountWithCommaSeparator,
    AmountNoDecimalsWithCommaSeparator,
}

impl FormatMode {
    pub const ALL: [FormatMode; 4] = [
        FormatMode::Amount,
        FormatMode::AmountNoDecimals,
        FormatMode::AmountWithCommaSeparator,
        FormatMode::AmountNoDecimalsWithCommaSeparator,
    ];

    /// Placeholder word for this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::AmountNoDecimals => "amount_no_decimals",
            Self::AmountWithCommaSeparator => "amount_with_comma_separator",
            Self::AmountNoDecimalsWithCommaSeparator => "amount_no_decimals_with_comma_separator",
        }
    }

    /// Number of fractional digits rendered
    pub fn precision(&self) -> u32 {
        match self {
            Self::Amount | Self::AmountWithCommaSeparator => 2,
            Self::AmountNoDecimals | Self::AmountNoDecimalsWithCommaSeparator => 0,
        }
    }

    pub fn thousands_separator(&self) -> char {
        match self {
            Self::Amount | Self::AmountNoDecimals => ',',
            Self::AmountWithCommaSeparator | Self::AmountNoDecimalsWithCommaSeparator => '.',
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::Amount | Self::AmountNoDecimals => '.',
            Self::AmountWithCommaSeparator | Self::AmountNoDecimalsWithCommaSeparator => ',',
        }
    }
}

impl fmt::Display for FormatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatMode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| FormatError::unrecognized(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_str() {
        for mode in FormatMode::ALL {
            assert_eq!(mode.as_str().parse::<FormatMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_mode_is_case_sensitive() {
        let result = "Amount".parse::<FormatMode>();
        assert_eq!(result, Err(FormatError::UnrecognizedMode("Amount".to_string())));
    }

    #[test]
    fn test_mode_unknown_word() {
        let result = "amount_with_apostrophe_separator".parse::<FormatMode>();
        assert!(matches!(result, Err(FormatError::UnrecognizedMode(w)) if w == "amount_with_apostrophe_separator"));
    }

    #[test]
    fn test_mode_parameters() {
        let m = FormatMode::AmountNoDecimalsWithCommaSeparator;
        assert_eq!(m.precision(), 0);
        assert_eq!(m.thousands_separator(), '.');
        assert_eq!(m.decimal_separator(), ',');

        let m = FormatMode::Amount;
        assert_eq!(m.precision(), 2);
        assert_eq!(m.thousands_separator(), ',');
        assert_eq!(m.decimal_separator(), '.');
    }

    #[test]
    fn test_mode_serde_uses_placeholder_word() {
        let json = serde_json::to_string(&FormatMode::AmountWithCommaSeparator).unwrap();
        assert_eq!(json, "\"amount_with_comma_separator\"");
    }
}
