/// A required request field was absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required field: {0}")]
pub struct MissingField(pub &'static str);

/// Trims `value` and rejects it when absent or empty.
pub fn require(field: &'static str, value: Option<String>) -> Result<String, MissingField> {
    optional(value).ok_or(MissingField(field))
}

/// Like [`require`] but returns the value untouched. Used for secrets, where
/// surrounding whitespace is significant.
pub fn require_verbatim(
    field: &'static str,
    value: Option<String>,
) -> Result<String, MissingField> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(MissingField(field))
}

/// Trims `value`, treating a blank string the same as an absent one.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
