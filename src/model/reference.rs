//! Field checks shared by the airline, aircraft and station parameter types.

use crate::error::reference::ReferenceError;

/// Checks a required text field's length in characters after trimming.
pub(crate) fn require_text(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ReferenceError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReferenceError::Missing(field));
    }

    check_length(field, value, min, max)
}

/// Checks an optional text field does not exceed `max` characters.
pub(crate) fn optional_text(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<(), ReferenceError> {
    match value {
        Some(value) => check_length(field, value, 0, max),
        None => Ok(()),
    }
}

/// Checks an optional count is not negative.
pub(crate) fn non_negative(field: &'static str, value: Option<i32>) -> Result<(), ReferenceError> {
    match value {
        Some(value) if value < 0 => Err(ReferenceError::OutOfRange {
            field,
            value: value.to_string(),
        }),
        _ => Ok(()),
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ReferenceError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ReferenceError::Length { field, min, max });
    }

    Ok(())
}
