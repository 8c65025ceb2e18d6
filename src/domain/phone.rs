//! Phone field.

use super::errors::ValidationError;
use super::field::{Field, Validated};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A phone number attached to a contact.
///
/// The number format has not been pinned down, so validation currently
/// accepts any string. Phones compare by value.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Phone};
///
/// let phone = Phone::new("123-456-7890").unwrap();
/// assert_eq!(phone.as_str(), "123-456-7890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Field for Phone {
    type Value = String;

    const KIND: &'static str = "phone";

    // TODO: enforce a phone format once one is agreed for the book.
    fn validate(raw: &str) -> Option<Self::Value> {
        Some(raw.to_string())
    }

    fn from_valid(value: Validated<Self::Value>) -> Self {
        Self(value.into_inner())
    }

    fn value(&self) -> &Self::Value {
        &self.0
    }

    fn replace_valid(&mut self, value: Validated<Self::Value>) {
        self.0 = value.into_inner();
    }
}

impl Phone {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
