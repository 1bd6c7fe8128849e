//! Credential validator
//!
//! Implements the login form checks: sanitization, email shape, password strength.
//! Every function here is pure; malformed input is reported as a rejection value.

use std::sync::LazyLock;

use regex::Regex;

use super::credentials::{CredentialInput, MARKUP_CHARS, PASSWORD_MIN_LENGTH, PASSWORD_SYMBOLS};
use super::results::{RejectReason, ValidationResult};

/// `local@domain.tld` shape: no whitespace or extra `@` in any part.
/// The byte-order mark counts as whitespace here, as it does in browsers.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

/// Unicode whitespace plus U+FEFF.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Trims surrounding whitespace and removes every `<` and `>`.
///
/// Whitespace uncovered by removing a bracket at either end is trimmed as well,
/// so the output never starts or ends with whitespace and `sanitize` is idempotent.
pub fn sanitize(input: &str) -> String {
    input
        .trim_matches(is_blank)
        .replace(MARKUP_CHARS, "")
        .trim_matches(is_blank)
        .to_string()
}

/// Syntactic email check only; no DNS or mailbox verification.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// At least 8 characters, at least one ASCII letter and one digit, and nothing
/// outside ASCII letters, digits and `@$!%*#?&`.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_LENGTH
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(&c))
}

/// Validates a raw credential pair.
///
/// Checks run in a fixed order and stop at the first failure:
/// missing field, then email format, then password strength.
pub fn validate_credential(raw_email: &str, raw_password: &str) -> ValidationResult {
    validate_input(&CredentialInput::new(raw_email, raw_password))
}

/// Same as [`validate_credential`] for an already collected [`CredentialInput`].
pub fn validate_input(input: &CredentialInput) -> ValidationResult {
    let sanitized = input.sanitized();

    if sanitized.has_missing_field() {
        return ValidationResult::Rejected(RejectReason::MissingField);
    }

    if !is_valid_email(&sanitized.email) {
        return ValidationResult::Rejected(RejectReason::InvalidEmailFormat);
    }

    if !is_valid_password(&sanitized.password) {
        return ValidationResult::Rejected(RejectReason::WeakPassword);
    }

    ValidationResult::Accepted {
        email: sanitized.email,
    }
}
