//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The raw value was rejected by the field's validation predicate.
    InvalidValue {
        /// Kind of field that rejected the value (e.g. "birthday").
        field: &'static str,
        /// The rejected input, verbatim.
        value: String,
    },
}

impl ValidationError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        match self {
            Self::InvalidValue { value, .. } => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, value } => {
                write!(f, "Invalid value for {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
