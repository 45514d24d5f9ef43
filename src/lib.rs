//! theme_money Library
//!
//! Money formatting for storefront themes: minor-unit amounts rendered
//! through merchant templates such as `"${{amount}}"`.

pub mod cli;
pub mod config;
pub mod domain;
pub mod formatter;
pub mod settings;

mod error;

pub use config::{Config, ConfigError, LogFormat};
pub use domain::{Amount, FormatError, FormatMode, FormatTemplate};
pub use error::{AppError, AppResult};
pub use formatter::{render_decimal, MoneyFormatter};
pub use settings::ShopSettings;
