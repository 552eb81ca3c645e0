use std::path::PathBuf;

use thiserror::Error;

/// Custom error types for qadesk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QadeskError {
    #[error("Could not read config file {}: {}", .path.display(), .message)]
    ConfigRead { path: PathBuf, message: String },

    #[error("Invalid config file {}: {}", .path.display(), .message)]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid route '{0}': routes are non-empty paths without whitespace")]
    InvalidRoute(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for QadeskError {
    fn from(err: std::io::Error) -> Self {
        QadeskError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
