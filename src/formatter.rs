//! Money formatter
//!
//! Turns minor-unit amounts into display strings using a merchant template.
//! Template mistakes are errors; bad amounts render as zero.

use once_cell::sync::Lazy;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::Config;
use crate::domain::{Amount, FormatError, FormatTemplate};
use crate::settings::ShopSettings;

const MINOR_PER_MAJOR: Decimal = Decimal::ONE_HUNDRED;

static FALLBACK: Lazy<FormatTemplate> = Lazy::new(FormatTemplate::fallback);

/// Formatter holding the shop's default templates.
///
/// Immutable once built, so one instance can be shared across threads.
///
/// # Example
/// ```
/// use theme_money::MoneyFormatter;
///
/// let formatter = MoneyFormatter::new();
/// assert_eq!(formatter.format(150000, None).unwrap(), "$1,500.00");
/// assert_eq!(formatter.format(150000, Some("{{amount_no_decimals}}")).unwrap(), "1,500");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoneyFormatter {
    default_template: Option<FormatTemplate>,
    currency_template: Option<FormatTemplate>,
}

impl MoneyFormatter {
    /// Formatter without configured templates (uses `"${{amount}}"`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter whose default template is `template`.
    ///
    /// # Errors
    /// Returns the template's `FormatError` if it cannot be parsed.
    pub fn with_default_template(template: &str) -> Result<Self, FormatError> {
        Ok(Self {
            default_template: Some(FormatTemplate::parse(template)?),
            currency_template: None,
        })
    }

    /// Set the template used by [`MoneyFormatter::format_with_currency`]
    pub fn with_currency_template(mut self, template: &str) -> Result<Self, FormatError> {
        self.currency_template = Some(FormatTemplate::parse(template)?);
        Ok(self)
    }

    /// Build from already-validated process configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_template: config.money_format.clone(),
            currency_template: config.money_with_currency_format.clone(),
        }
    }

    /// Build from shop settings, validating both templates
    pub fn from_settings(settings: &ShopSettings) -> Result<Self, FormatError> {
        Ok(Self {
            default_template: settings.money_template()?,
            currency_template: settings.money_with_currency_template()?,
        })
    }

    /// Template used when a call supplies none
    pub fn default_template(&self) -> FormatTemplate {
        self.default_template.clone().unwrap_or_default()
    }

    /// Format `amount` with `template`, or the default template if `None`.
    ///
    /// # Errors
    /// - `FormatError::MalformedTemplate` if the template has no placeholder
    /// - `FormatError::UnrecognizedMode` if the placeholder word is unknown
    pub fn format(
        &self,
        amount: impl Into<Amount>,
        template: Option<&str>,
    ) -> Result<String, FormatError> {
        let amount = amount.into();
        match template {
            Some(raw) => {
                let template = FormatTemplate::parse(raw)?;
                Ok(self.format_with(&amount, &template))
            }
            None => {
                tracing::debug!("No template supplied, using default");
                Ok(self.format_with(&amount, self.default_template.as_ref().unwrap_or(&*FALLBACK)))
            }
        }
    }

    /// Format with the currency template, falling back to the default one
    pub fn format_with_currency(&self, amount: impl Into<Amount>) -> String {
        let template = self
            .currency_template
            .as_ref()
            .or(self.default_template.as_ref())
            .unwrap_or(&*FALLBACK);
        self.format_with(&amount.into(), template)
    }

    /// Format with a pre-parsed template. Never fails.
    pub fn format_with(&self, amount: &Amount, template: &FormatTemplate) -> String {
        let minor_units = amount.minor_units();
        if minor_units.is_none() {
            tracing::warn!(%amount, "Invalid amount, rendering as zero");
        }

        let mode = template.mode();
        let value = render_decimal(
            minor_units,
            mode.precision(),
            mode.thousands_separator(),
            mode.decimal_separator(),
        );
        template.render(&value)
    }
}

/// Render minor units as a grouped decimal string in major units.
///
/// The value is divided by 100 and rounded half away from zero to
/// `precision` places. `None` renders as zero at that precision.
///
/// ```
/// use rust_decimal::Decimal;
/// use theme_money::formatter::render_decimal;
///
/// assert_eq!(render_decimal(Some(Decimal::new(123456789, 0)), 2, ',', '.'), "1,234,567.89");
/// assert_eq!(render_decimal(None, 0, ',', '.'), "0");
/// ```
pub fn render_decimal(
    minor_units: Option<Decimal>,
    precision: u32,
    thousands_separator: char,
    decimal_separator: char,
) -> String {
    let major = minor_units
        .and_then(|minor| minor.checked_div(MINOR_PER_MAJOR))
        .unwrap_or(Decimal::ZERO);

    let mut rounded = major.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }

    let text = rounded.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::with_capacity(text.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(&group_thousands(integer, thousands_separator));
    if !fraction.is_empty() {
        out.push(decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Insert `separator` every three digits, counting from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}
