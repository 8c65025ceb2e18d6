//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, Field, Phone, Record};

/// Build a date, panicking on an invalid calendar date.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// Build a phone from a literal.
#[allow(dead_code)]
pub fn phone(value: &str) -> Phone {
    Phone::new(value).expect("phones accept any value")
}

/// John: one phone, born 1990-05-15.
pub fn john() -> Record {
    let mut record = Record::new("John", Some("1990-05-15")).expect("valid John record");
    record.add_phone(phone("123-456-7890"));
    record
}

/// Alice: one phone, born 1985-10-25.
pub fn alice() -> Record {
    let mut record = Record::new("Alice", Some("1985-10-25")).expect("valid Alice record");
    record.add_phone(phone("987-654-3210"));
    record
}

/// A book holding John and Alice, in that order.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(john());
    book.add_record(alice());
    book
}

/// A book of `count` phoneless records named `contact-0`, `contact-1`, ...
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..count {
        book.add_record(Record::new(format!("contact-{}", i), None).expect("valid record"));
    }
    book
}
