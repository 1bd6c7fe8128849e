//! Credential validation
//!
//! Sanitizes and validates the email/password pair submitted by the login form.

pub mod credentials;
pub mod results;
pub mod validator;

pub use credentials::{CredentialInput, SanitizedCredential};
pub use results::{RejectReason, ValidationResult};
pub use validator::{is_valid_email, is_valid_password, sanitize, validate_credential};
