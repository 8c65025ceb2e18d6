//! Name field.

use super::errors::ValidationError;
use super::field::{Field, Validated};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A contact's name.
///
/// No naming rules have been agreed on yet, so every string is accepted.
/// Keep validation in [`Field::validate`] when rules are added.
///
/// # Example
///
/// ```
/// use contact_book::domain::{Field, Name};
///
/// let name = Name::new("John").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Field for Name {
    type Value = String;

    const KIND: &'static str = "name";

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

impl Name {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
