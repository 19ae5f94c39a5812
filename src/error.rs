use std::io;

use thiserror::Error;

/// Library-wide error type for nsskip operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure during scanning, reading, or writing.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Malformed configuration file.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
        }
    }
}
