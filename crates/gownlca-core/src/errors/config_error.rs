use super::error_code::{self, GownlcaErrorCode};

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}

impl GownlcaErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ParseError { .. } => error_code::CONFIG_PARSE,
            Self::FileNotFound { .. } => error_code::CONFIG_NOT_FOUND,
            Self::ValidationFailed { .. } => error_code::CONFIG_INVALID,
        }
    }
}
