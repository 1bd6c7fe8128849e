pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod session;

pub use app::Console;
pub use auth::{RejectReason, ValidationResult, validate_credential};
pub use crate::config::AppConfig;
pub use error::AppError;
pub use session::Session;
