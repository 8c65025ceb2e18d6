//! The `Field` abstraction shared by every validated contact value.

use super::errors::ValidationError;

/// A value that has passed its field's validation predicate.
///
/// Only the provided methods of [`Field`] can create one, so
/// [`Field::from_valid`] and [`Field::replace_valid`] cannot be called with
/// an unchecked value from outside this crate.
///
/// ```compile_fail
/// use chrono::NaiveDate;
/// use contact_book::domain::{Birthday, Field, Validated};
///
/// let date = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
/// let _ = Birthday::from_valid(Validated(date));
/// ```
#[derive(Debug)]
pub struct Validated<V>(V);

impl<V> Validated<V> {
    /// Unwrap the checked value.
    pub(crate) fn into_inner(self) -> V {
        self.0
    }
}

/// A single validated value.
///
/// Implementors supply the validation predicate through [`Field::validate`],
/// which also converts the raw input into the stored representation. The
/// provided constructors run it on every assignment, so no invalid value is
/// ever observable through [`Field::value`].
///
/// # Example
///
/// ```
/// use contact_book::domain::{Birthday, Field};
///
/// let mut birthday = Birthday::new("1990-05-15").unwrap();
/// assert!(birthday.set_value("1990-13-01").is_err());
/// assert_eq!(birthday.to_string(), "1990-05-15");
/// ```
pub trait Field: Sized {
    /// Stored representation of the value.
    type Value;

    /// Short name of the field kind, used in error messages.
    const KIND: &'static str;

    /// Validate `raw`, returning the value to store when it is acceptable.
    fn validate(raw: &str) -> Option<Self::Value>;

    /// Wrap a value that passed [`Field::validate`].
    fn from_valid(value: Validated<Self::Value>) -> Self;

    /// Get the stored value.
    fn value(&self) -> &Self::Value;

    /// Replace the stored value with one that passed [`Field::validate`].
    fn replace_valid(&mut self, value: Validated<Self::Value>);

    /// Create a new field, validating `raw`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidValue` carrying `raw` when the
    /// predicate rejects it.
    fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        match Self::validate(&raw) {
            Some(value) => Ok(Self::from_valid(Validated(value))),
            None => Err(Self::rejected(raw)),
        }
    }

    /// Reassign the value. On failure the previous value is kept.
    fn set_value(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        let raw = raw.into();
        let value = Self::validate(&raw).ok_or_else(|| Self::rejected(raw))?;
        self.replace_valid(Validated(value));
        Ok(())
    }

    /// Build the error for a rejected input.
    fn rejected(raw: String) -> ValidationError {
        ValidationError::InvalidValue {
            field: Self::KIND,
            value: raw,
        }
    }
}
