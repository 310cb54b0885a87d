//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or empty
    Empty { field: &'static str },

    /// String doesn't parse into the expected type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Numeric field must be at least 1
    NotPositive { field: &'static str, value: i64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::NotPositive { field, value } => {
                write!(f, "{} must be a positive integer, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
