//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field rejected its raw value
    #[error(transparent)]
    InvalidValue(#[from] ValidationError),

    /// Input does not describe a well-formed record
    #[error("Invalid record format: {0}")]
    InvalidRecordFormat(String),

    /// Referenced phone is not present on the record
    #[error("Phone not found in record: {0}")]
    NotFound(String),

    /// Pagination was asked for pages of zero records
    #[error("Invalid page size: {0} (must be at least 1)")]
    InvalidPageSize(usize),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
