//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;
use std::path::{Path, PathBuf};

use crate::domain::{FormatError, FormatTemplate};
use crate::settings::ShopSettings;

/// Log output style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Default money template (MONEY_FORMAT)
    pub money_format: Option<FormatTemplate>,

    /// Template with currency code (MONEY_WITH_CURRENCY_FORMAT)
    pub money_with_currency_format: Option<FormatTemplate>,

    /// Shop settings file consulted for templates not set directly
    pub shop_settings_path: Option<PathBuf>,

    /// Log output style (LOG_FORMAT)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut money_format = template_var(&lookup, "MONEY_FORMAT")?;
        let mut money_with_currency_format = template_var(&lookup, "MONEY_WITH_CURRENCY_FORMAT")?;

        let shop_settings_path = lookup("SHOP_SETTINGS").map(PathBuf::from);
        if let Some(path) = &shop_settings_path {
            let settings = read_settings(path)?;
            if money_format.is_none() {
                money_format = settings
                    .money_template()
                    .map_err(|source| ConfigError::InvalidTemplate { key: "money_format", source })?;
            }
            if money_with_currency_format.is_none() {
                money_with_currency_format = settings
                    .money_with_currency_template()
                    .map_err(|source| ConfigError::InvalidTemplate {
                        key: "money_with_currency_format",
                        source,
                    })?;
            }
        }

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(_) => return Err(ConfigError::InvalidValue("LOG_FORMAT")),
        };

        Ok(Self {
            money_format,
            money_with_currency_format,
            shop_settings_path,
            log_format,
        })
    }

    /// Check if logs should be emitted as JSON
    pub fn is_json_logging(&self) -> bool {
        self.log_format == LogFormat::Json
    }
}

fn template_var<F>(lookup: &F, key: &'static str) -> Result<Option<FormatTemplate>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| FormatTemplate::parse(&raw))
        .transpose()
        .map_err(|source| ConfigError::InvalidTemplate { key, source })
}

fn read_settings(path: &Path) -> Result<ShopSettings, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    ShopSettings::from_json(&contents).map_err(|source| ConfigError::SettingsParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("Invalid money template in {key}: {source}")]
    InvalidTemplate {
        key: &'static str,
        #[source]
        source: FormatError,
    },

    #[error("Cannot read shop settings {path:?}: {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse shop settings {path:?}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormatMode;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.is_json_logging());
    }

    #[test]
    fn test_money_format_from_env() {
        let config = Config::from_lookup(lookup(&[
            ("MONEY_FORMAT", "{{amount_no_decimals}} kr"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();

        let template = config.money_format.unwrap();
        assert_eq!(template.mode(), FormatMode::AmountNoDecimals);
        assert!(config.money_with_currency_format.is_none());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_template_rejected() {
        let err = Config::from_lookup(lookup(&[("MONEY_FORMAT", "$amount")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTemplate { key: "MONEY_FORMAT", source } if source.is_malformed()
        ));
    }

    #[test]
    fn test_invalid_log_format() {
        let err = Config::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("LOG_FORMAT")));
    }

    #[test]
    fn test_settings_file_fills_unset_templates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"money_format": "£{{{{amount}}}}", "money_with_currency_format": "£{{{{amount}}}} GBP"}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let config = Config::from_lookup(lookup(&[
            ("SHOP_SETTINGS", path.as_str()),
            ("MONEY_FORMAT", "{{amount_with_comma_separator}}"),
        ]))
        .unwrap();

        // the environment wins over the settings file
        assert_eq!(config.money_format.unwrap().as_str(), "{{amount_with_comma_separator}}");
        assert_eq!(config.money_with_currency_format.unwrap().as_str(), "£{{amount}} GBP");
    }

    #[test]
    fn test_missing_settings_file() {
        let err = Config::from_lookup(lookup(&[("SHOP_SETTINGS", "/nonexistent/settings.json")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::SettingsRead { .. }));
    }
}
