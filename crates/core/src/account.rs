//! Account field rules: signup input and profile edits.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::validation::finish;

/// Accepted email shape. Deliberately narrow: a 2-6 letter TLD is required.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,6}$";

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 3;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a signup payload, reporting every failing field.
pub fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), CoreError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push("name: Name must be required".to_string());
    }
    if !is_valid_email(email) {
        errors.push("email: Invalid email format".to_string());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "password: Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    finish(errors)
}

/// Validate the fields of a login payload are present.
pub fn validate_login(email: &str, password: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation(
            "Invalid email or password".to_string(),
        ));
    }
    Ok(())
}

/// Normalize an optional profile text field: blank means "keep current value".
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse a postal code; blank means "keep current value".
pub fn parse_pincode(raw: Option<String>) -> Result<Option<i32>, CoreError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(v) => v.parse::<i32>().map(Some).map_err(|_| {
            CoreError::InvalidFields(vec![format!("pincode: '{v}' is not a valid number")])
        }),
    }
}
