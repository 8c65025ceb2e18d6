//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone};
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Placeholder rendered when a record has no birthday.
const NO_BIRTHDAY: &str = "N/A";

/// A contact: one name, zero or more phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the record's key in an address book
    name: Name,

    /// Phone numbers in insertion order; duplicates are allowed
    #[serde(default)]
    phones: Vec<Phone>,

    /// Date of birth, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones.
    ///
    /// An empty `birthday` string is treated the same as `None`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidValue` if the name or birthday is rejected.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> BookResult<Self> {
        let name = Name::new(name)?;
        let birthday = Self::parse_birthday(birthday)?;

        Ok(Self {
            name,
            phones: Vec::new(),
            birthday,
        })
    }

    fn parse_birthday(raw: Option<&str>) -> BookResult<Option<Birthday>> {
        Ok(raw
            .filter(|raw| !raw.is_empty())
            .map(Birthday::new)
            .transpose()?)
    }

    /// Get the contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Get the birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Replace the birthday. On failure the previous birthday is kept.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> BookResult<()> {
        self.birthday = Self::parse_birthday(birthday)?;
        Ok(())
    }

    /// Find the first phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == value)
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: Phone) {
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no equal phone exists; the phone
    /// list is left unchanged.
    pub fn remove_phone(&mut self, phone: &Phone) -> BookResult<()> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        debug!(name = %self.name, phone = %phone, "Removed phone");
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no phone equals `old`.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> BookResult<()> {
        let index = self.position_of(old)?;
        debug!(name = %self.name, old = %old, new = %new, "Editing phone");
        self.phones[index] = new;
        Ok(())
    }

    fn position_of(&self, phone: &Phone) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| BookError::NotFound(phone.to_string()))
    }

    /// Days until the next birthday, counted from the local date.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<u32> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 when it is today.
    ///
    /// A February 29 birthday is celebrated on February 28 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<u32> {
        self.birthday.as_ref()?.days_until(today)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Name: {}, Phones: {}, Birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str(NO_BIRTHDAY),
        }
    }
}

/// Parses the layout produced by `Display`.
///
/// The layout has no escaping, so these records do not survive the trip:
/// - a phone containing `", "` comes back split into several phones;
/// - a phone containing `", Birthday: "` moves text into the birthday;
/// - a name containing `", Phones: "` moves text into the phones;
/// - a single empty phone comes back as no phones at all.
impl FromStr for Record {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BookError::InvalidRecordFormat(s.to_string());

        let rest = s.strip_prefix("Name: ").ok_or_else(malformed)?;
        let (rest, birthday) = rest.rsplit_once(", Birthday: ").ok_or_else(malformed)?;
        let (name, phones) = rest.split_once(", Phones: ").ok_or_else(malformed)?;

        let birthday = match birthday {
            NO_BIRTHDAY => None,
            raw => Some(raw),
        };
        let mut record = Record::new(name, birthday)?;

        if !phones.is_empty() {
            for phone in phones.split(", ") {
                record.add_phone(Phone::new(phone)?);
            }
        }

        Ok(record)
    }
}
