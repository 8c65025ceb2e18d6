//! Data models for the contact book.
//!
//! This module contains the contact record assembled from validated fields.

pub mod record;

pub use record::Record;
