//! Field-level validation rules applied before any mutation.
//!
//! Pure and synchronous. Failures are returned as data for inline rendering,
//! never as `Err` - a candidate that fails validation is not an error
//! condition, it is an expected outcome.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Maximum accepted name length, counted in characters before trimming.
pub const MAX_NAME_LENGTH: usize = 50;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
}

impl ValidationError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a candidate name.
///
/// Checks run in a fixed order and short-circuit on the first failure:
/// required, max length, allowed characters. The length check runs against
/// the raw string, before trimming, so whitespace padding counts.
pub fn validate_name(name: &str) -> Option<ValidationError> {
    if name.trim().is_empty() {
        return Some(ValidationError::new(Field::Name, "Name is required"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Some(ValidationError::new(
            Field::Name,
            format!("Name must not exceed {MAX_NAME_LENGTH} characters"),
        ));
    }

    // Only letters and spaces
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Some(ValidationError::new(
            Field::Name,
            "Name can only contain letters and spaces",
        ));
    }

    None
}

/// Validate a candidate email against a `local@domain.tld` shaped pattern.
pub fn validate_email(email: &str) -> Option<ValidationError> {
    if email.trim().is_empty() {
        return Some(ValidationError::new(Field::Email, "Email is required"));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Some(ValidationError::new(Field::Email, "Invalid email format"));
    }

    None
}

/// Run both field checks independently. The name error, if any, always
/// precedes the email error.
pub fn validate_user(name: &str, email: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(name_error) = validate_name(name) {
        errors.push(name_error);
    }

    if let Some(email_error) = validate_email(email) {
        errors.push(email_error);
    }

    errors
}
