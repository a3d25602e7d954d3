use std::io;

use thiserror::Error;

use crate::domain::prompt::TemplateError;

/// Library-wide error type for clinprompt operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Config file does not exist at the given path.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// A configuration key required by the selected options is absent.
    #[error("Missing required configuration key '{key}'")]
    MissingConfigKey { key: String },

    /// A configuration key carries an unusable value.
    #[error("Invalid configuration key '{key}': {reason}")]
    InvalidConfig { key: String, reason: String },

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    YamlParseError(#[from] serde_yaml::Error),

    /// A structured record field could not be parsed.
    #[error("Failed to parse {field} '{value}': {reason}")]
    ParseError { field: String, value: String, reason: String },

    /// Template is malformed or references an unsupported placeholder.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// A known placeholder had no resolved value at render time.
    #[error("No value resolved for placeholder '{field}'")]
    MissingField { field: String },

    /// Record source could not be read.
    #[error("Failed to read patient records from {path}: {details}")]
    RecordSource { path: String, details: String },
}

impl AppError {
    pub fn invalid_config<K: Into<String>, R: Into<String>>(key: K, reason: R) -> Self {
        AppError::InvalidConfig { key: key.into(), reason: reason.into() }
    }

    pub fn parse_error<F, V, R>(field: F, value: V, reason: R) -> Self
    where
        F: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        AppError::ParseError { field: field.into(), value: value.into(), reason: reason.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigMissing(_) | AppError::MissingConfigKey { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::InvalidConfig { .. }
            | AppError::YamlParseError(_)
            | AppError::ParseError { .. }
            | AppError::Template(_)
            | AppError::RecordSource { .. } => io::ErrorKind::InvalidInput,
            AppError::MissingField { .. } => io::ErrorKind::Other,
        }
    }
}
