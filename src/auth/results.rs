//! Validation result types
//!
//! Defines the outcome of a credential validation attempt.

use std::fmt;

/// Why a credential pair was rejected.
///
/// Variants are listed in the order the checks run; only the first failing
/// check is ever reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    MissingField,
    InvalidEmailFormat,
    WeakPassword,
}

impl RejectReason {
    /// User-facing message shown under the login form.
    pub fn message(&self) -> &'static str {
        match self {
            RejectReason::MissingField => "Please enter both email and password",
            RejectReason::InvalidEmailFormat => "Please enter a valid email address",
            RejectReason::WeakPassword => {
                "Password must be at least 8 characters with letters and numbers"
            }
        }
    }

    /// Short stable identifier, used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            RejectReason::MissingField => "missing_field",
            RejectReason::InvalidEmailFormat => "invalid_email_format",
            RejectReason::WeakPassword => "weak_password",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Result of validating one credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Carries the sanitized email.
    Accepted { email: String },
    Rejected(RejectReason),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted { .. })
    }

    /// Returns the accepted email, if any.
    pub fn email(&self) -> Option<&str> {
        match self {
            ValidationResult::Accepted { email } => Some(email),
            ValidationResult::Rejected(_) => None,
        }
    }

    /// Returns the rejection reason, if any.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            ValidationResult::Accepted { .. } => None,
            ValidationResult::Rejected(reason) => Some(*reason),
        }
    }
}
