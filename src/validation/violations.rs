//! Field-level validation failures.

use thiserror::Error;

/// One problem with a transaction field.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldViolation {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
        value: String,
    },

    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },
}
