//! Common test utilities

use std::io::Write;

use tempfile::NamedTempFile;

/// Shop settings as exported by a euro storefront
pub const EURO_SHOP_SETTINGS: &str = r#"{
    "money_format": "€{{amount_with_comma_separator}}",
    "money_with_currency_format": "€{{amount_with_comma_separator}} EUR",
    "currency": "EUR"
}"#;

/// Write shop settings JSON to a temporary file that lives as long as the handle
pub fn write_settings(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create settings file");
    file.write_all(json.as_bytes())
        .expect("Failed to write settings file");
    file
}
