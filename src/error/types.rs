//! Error types
//!
//! Failures of the application shell. Rejected credentials are not errors;
//! see [`crate::auth::RejectReason`].

use std::fmt;
use std::io;

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    Config(config::ConfigError),
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
