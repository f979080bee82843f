//! Bridge between `validator` derive output and [`CoreError`].
//!
//! Request DTOs derive [`Validate`]; handlers call [`validate_fields`] so that
//! every failing field ends up in one [`CoreError::InvalidFields`].

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Flatten `validator` errors into `"field: message"` strings, sorted by field.
pub fn field_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let detail = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("failed '{}' check", err.code));
                format!("{field}: {detail}")
            })
        })
        .collect();
    messages.sort();
    messages
}

/// Run derived validation on `input`, converting failures to [`CoreError`].
pub fn validate_fields<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::InvalidFields(field_messages(&errors)))
}

/// Turn a list of collected messages into a result.
pub fn finish(messages: Vec<String>) -> Result<(), CoreError> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(CoreError::InvalidFields(messages))
    }
}
