//! Error handlers
//!
//! Reports application errors and maps them to process exit codes.

use crate::error::types::AppError;
use log::error;

/// Exit code for configuration errors (sysexits `EX_CONFIG`).
pub const EXIT_CONFIG: i32 = 78;
/// Exit code for I/O errors (sysexits `EX_IOERR`).
pub const EXIT_IO: i32 = 74;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Login module error: {}", err);
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => EXIT_CONFIG,
        AppError::Io(_) => EXIT_IO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_exit_codes() {
        let config_err = AppError::Config(config::ConfigError::Message("x".into()));
        assert_eq!(error_to_exit_code(&config_err), EXIT_CONFIG);

        let io_err = AppError::Io(io::Error::other("x"));
        assert_eq!(error_to_exit_code(&io_err), EXIT_IO);
    }
}
