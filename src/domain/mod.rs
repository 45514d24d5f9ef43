//! Domain module
//!
//! Value types for money formatting.

pub mod amount;
pub mod error;
pub mod mode;
pub mod template;

pub use amount::Amount;
pub use error::FormatError;
pub use mode::FormatMode;
pub use template::{FormatTemplate, FALLBACK_TEMPLATE};
