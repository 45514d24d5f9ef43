//! Amount type
//!
//! Tagged input union for prices handed over by page-rendering code.
//! Every variant is interpreted as a count of minor units (cents); the
//! explicit normalization step is [`Amount::minor_units`].

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A price in minor units, as received from the page.
///
/// Text amounts have every `.` removed before they are read, so
/// `"1.234"` means 1234 cents. Callers must not pass strings that are
/// already in major units with some other separator convention.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use theme_money::domain::Amount;
///
/// let amount = Amount::from("1.234");
/// assert_eq!(amount.minor_units(), Some(Decimal::new(1234, 0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Whole minor units
    Integer(i64),

    /// Minor units carried as a float (may be NaN)
    Float(f64),

    /// Digit string, possibly with `.` separators
    Text(String),

    /// No value at all
    #[default]
    Missing,
}

impl Amount {
    /// Resolve to a minor-unit quantity.
    ///
    /// Returns `None` for anything that is not a number: NaN or infinite
    /// floats, unparseable text and `Missing`. Empty text is zero.
    pub fn minor_units(&self) -> Option<Decimal> {
        match self {
            Self::Integer(value) => Some(Decimal::from(*value)),
            Self::Float(value) => Decimal::from_f64(*value),
            Self::Text(text) => parse_text(text),
            Self::Missing => None,
        }
    }

    /// Check whether normalization yields a number
    pub fn is_valid(&self) -> bool {
        self.minor_units().is_some()
    }
}

fn parse_text(text: &str) -> Option<Decimal> {
    let digits: String = text.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim();
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }
    Decimal::from_str(digits)
        .or_else(|_| Decimal::from_scientific(digits))
        .ok()
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Float(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{:?}", text),
            Self::Missing => f.write_str("<missing>"),
        }
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for Amount {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Amount>> From<Option<T>> for Amount {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}
