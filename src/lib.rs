//! Contact Book - an in-memory address book with validated contact fields.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`) behind the `Field` trait
//! - **models**: The contact `Record`
//! - **book**: The `AddressBook` collection with name search and pagination
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::{AddressBook, Pages};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::Record;
