//! Credential input types
//!
//! Raw and sanitized forms of the (email, password) pair submitted in one attempt.

use super::validator::sanitize;

/// Minimum number of characters in an accepted password.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols allowed in a password besides ASCII letters and digits.
pub const PASSWORD_SYMBOLS: [char; 8] = ['@', '$', '!', '%', '*', '#', '?', '&'];

/// Characters stripped from every input before validation.
pub(crate) const MARKUP_CHARS: [char; 2] = ['<', '>'];

/// The pair of strings exactly as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialInput {
    pub email: String,
    pub password: String,
}

impl CredentialInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Trims and strips markup characters from both fields.
    pub fn sanitized(&self) -> SanitizedCredential {
        SanitizedCredential {
            email: sanitize(&self.email),
            password: sanitize(&self.password),
        }
    }
}

/// The pair after sanitization. Only exists between sanitizing and validating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedCredential {
    pub email: String,
    pub password: String,
}

impl SanitizedCredential {
    /// Returns true when either field is empty after sanitization.
    pub fn has_missing_field(&self) -> bool {
        self.email.is_empty() || self.password.is_empty()
    }
}
