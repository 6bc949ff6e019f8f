//! Validation error for response items

/// A response item could not be coerced into its record shape.
#[derive(Debug, thiserror::Error)]
#[error("invalid {record}: {message}")]
pub struct ValidationError {
    pub record: &'static str,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(record: &'static str, source: serde_json::Error) -> Self {
        Self {
            record,
            message: source.to_string(),
        }
    }
}

/// Result alias for record construction.
pub type Result<T> = std::result::Result<T, ValidationError>;
