use std::fmt;
use thiserror::Error;

/// One range-policy failure found while checking an intake record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("day index {index} out of range for {len} day(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("validation failed: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// True for the engine's own failures: a non-finite number or a day
    /// index with no data behind it.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::IndexOutOfRange { .. })
    }

    pub(crate) fn non_finite(field: &str, value: f64) -> Self {
        Self::InvalidInput(format!("{field} must be finite, got {value}"))
    }

    pub(crate) fn out_of_range(value: f64) -> Self {
        Self::InvalidInput(format!(
            "adjusted distance out of range for whole yards, got {value}"
        ))
    }
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<chrono::ParseError> for CoreError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
