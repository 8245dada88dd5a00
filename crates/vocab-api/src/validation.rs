use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::ValidateLength;
use vocab_db::MAX_TEXT_LEN;

use crate::error::ApiError;

/// Message returned when a topic name is missing or blank
pub const TOPIC_NAME_REQUIRED: &str = "Topic name is required";

/// Message returned when a word is missing its topic or English term
pub const WORD_FIELDS_REQUIRED: &str = "Topic ID and English word are required";

/// Trim a required field, rejecting missing or blank values with `message`.
///
/// # Examples
/// ```
/// use vocab_api::validation::required;
///
/// assert_eq!(required(Some(" Travel "), "name required").unwrap(), "Travel");
/// assert!(required(Some("   "), "name required").is_err());
/// assert!(required(None, "name required").is_err());
/// ```
pub fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(ApiError::Validation(message.to_string())),
    }
}

/// Deserialize a request field that should be a string.
///
/// Anything else (a number, an object, `null`) becomes `None`, so the handler
/// reports it through [`required`] like a missing field.
pub fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Reject values wider than the column they are stored in
pub fn validate_max_length(field: &str, value: &str) -> Result<(), ApiError> {
    if !value.validate_length(None, Some(MAX_TEXT_LEN as u64), None) {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {MAX_TEXT_LEN} characters long"
        )));
    }

    Ok(())
}
