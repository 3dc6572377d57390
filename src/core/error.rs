use thiserror::Error;

/// Errors that can occur in billing configuration or camp workflows.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LagerwerkError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The acting person is not allowed to perform the operation.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// A camp application could not be submitted.
    #[error("camp could not be submitted: {0}")]
    Submission(String),

    /// Invalid or conflicting configuration state.
    #[error("configuration error: {0}")]
    Config(String),
}

/// A single validation error with field name and message.
///
/// Validation never aborts on the first failure; callers receive the full
/// list and surface it as one itemized alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Name of the invalid field (e.g. "account_number").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Stable error key for programmatic matching (e.g. "invalid_check_digit").
    pub key: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    /// Create a validation error without a key.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            key: None,
        }
    }

    /// Create a validation error with a stable key.
    pub fn with_key(
        field: impl Into<String>,
        message: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            key: Some(key.into()),
        }
    }
}

/// Join accumulated validation errors into a single alert line.
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
