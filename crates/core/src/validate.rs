//! Input validation for the name form.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::Gender;

/// Maximum accepted name length.
pub const MAX_NAME_LEN: usize = 255;

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z ]*$").expect("name pattern must compile")
});

/// Validate a candidate name, returning its trimmed form.
///
/// Checks run in a fixed order so the caller sees exactly one failure:
/// empty, then character set, then length.
pub fn accept_name(input: &str) -> std::result::Result<&str, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidCharacters);
    }
    if name.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong);
    }
    Ok(name)
}

/// Validate the gender selection.
pub fn accept_gender(selection: Option<Gender>) -> std::result::Result<Gender, ValidationError> {
    selection.ok_or(ValidationError::NoGenderSelected)
}
