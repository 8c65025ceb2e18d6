//! Birthday field and next-birthday arithmetic.

use super::errors::ValidationError;
use super::field::{Field, Validated};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Accepted textual layout: four-digit year, two-digit month and day.
const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid birthday regex"));

/// A contact's date of birth.
///
/// Validation parses the input as a `YYYY-MM-DD` calendar date; the stored
/// value is the parsed date, not the original text. Month and day must be
/// zero-padded, so `1990-5-15` is rejected.
///
/// # Example
///
/// ```
/// use chrono::Datelike;
/// use contact_book::domain::{Birthday, Field};
///
/// let birthday = Birthday::new("1990-05-15").unwrap();
/// assert_eq!(birthday.value().month(), 5);
/// assert!(Birthday::new("2024-13-40").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Field for Birthday {
    type Value = NaiveDate;

    const KIND: &'static str = "birthday";

    fn validate(raw: &str) -> Option<Self::Value> {
        if !DATE_SHAPE.is_match(raw) {
            return None;
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
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

impl Birthday {
    /// Get the stored date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's anniversary in `year`.
    ///
    /// February 29 falls on February 28 in non-leap years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
    }

    /// The next anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.anniversary_in(today.year())?;
        if this_year < today {
            self.anniversary_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Days from `today` until the next anniversary; 0 when it is today.
    ///
    /// Returns `None` only if the next anniversary is outside the
    /// representable calendar.
    pub fn days_until(&self, today: NaiveDate) -> Option<u32> {
        let next = self.next_occurrence(today)?;
        u32::try_from((next - today).num_days()).ok()
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize as YYYY-MM-DD
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self.0.format(DATE_FORMAT))
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_parses_components() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.date(), date(1990, 5, 15));
        assert_eq!(*birthday.value(), date(1990, 5, 15));
    }

    #[test]
    fn test_birthday_rejects_invalid_input() {
        for raw in [
            "2024-13-40",
            "hello",
            "",
            "1990-02-30",
            "1990-5-15",
            "90-05-15",
            "15.05.1990",
            " 1990-05-15",
            "1990-05-15T00:00",
        ] {
            let err = Birthday::new(raw).unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidValue {
                    field: "birthday",
                    value: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn test_stored_birthday_passes_its_own_validation() {
        for raw in ["0001-01-01", "1990-05-15", "2000-02-29", "9999-12-31"] {
            let birthday = Birthday::new(raw).unwrap();
            let shown = birthday.to_string();
            assert_eq!(shown, raw);
            assert_eq!(Birthday::validate(&shown), Some(birthday.date()));
        }
        assert!(Birthday::new("10000-01-01").is_err());
        assert!(Birthday::new("+10000-01-01").is_err());
    }

    #[test]
    fn test_birthday_accepts_leap_day() {
        assert!(Birthday::new("2000-02-29").is_ok());
        assert!(Birthday::new("1900-02-29").is_err());
    }

    #[test]
    fn test_set_value_keeps_previous_on_failure() {
        let mut birthday = Birthday::new("1990-05-15").unwrap();
        assert!(birthday.set_value("not a date").is_err());
        assert_eq!(birthday.date(), date(1990, 5, 15));

        birthday.set_value("1985-10-25").unwrap();
        assert_eq!(birthday.date(), date(1985, 10, 25));
    }

    #[test]
    fn test_days_until_later_this_year() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.days_until(date(2024, 5, 10)), Some(5));
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.days_until(date(2024, 5, 15)), Some(0));
    }

    #[test]
    fn test_days_until_rolls_to_next_year() {
        let birthday = Birthday::new("1990-05-15").unwrap();
        assert_eq!(birthday.days_until(date(2024, 5, 16)), Some(364));
        // Crossing Feb 29 2024 adds a day.
        assert_eq!(birthday.days_until(date(2023, 5, 16)), Some(365));
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        let birthday = Birthday::new("2000-02-29").unwrap();
        assert_eq!(birthday.anniversary_in(2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday.anniversary_in(2024), Some(date(2024, 2, 29)));
        assert_eq!(birthday.days_until(date(2023, 2, 28)), Some(0));
        assert_eq!(
            birthday.next_occurrence(date(2023, 3, 1)),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_birthday_display_and_serde() {
        let birthday = Birthday::new("1985-10-25").unwrap();
        assert_eq!(birthday.to_string(), "1985-10-25");
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"1985-10-25\"");

        let back: Birthday = serde_json::from_str("\"1985-10-25\"").unwrap();
        assert_eq!(back, birthday);
        assert!(serde_json::from_str::<Birthday>("\"1985-13-25\"").is_err());
    }
}
