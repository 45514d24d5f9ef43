//! Error handling module
//!
//! Centralized error type for the command-line front end.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    // Domain errors
    #[error(transparent)]
    Format(#[from] crate::domain::FormatError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidArguments(_) => 2,
            AppError::Format(_) => 65,
            AppError::Config(_) => 78,
        }
    }
}
