//! Address book: records keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use std::collections::HashMap;
use std::slice::{Chunks, Iter};
use tracing::{debug, warn};

/// A collection of records keyed by name, kept in insertion order.
///
/// Adding a record whose name is already present replaces the stored
/// record in place; there is no merge. Records are only reachable
/// read-only once added, so every key always matches its record's name.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John", Some("1990-05-15")).unwrap());
/// assert_eq!(book.find_records("Jo").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    /// Records in insertion order
    records: Vec<Record>,

    /// Name -> position in `records`
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name.
    ///
    /// An existing record with the same name is overwritten and keeps its
    /// original position.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();

        match self.index.get(&key).copied() {
            Some(position) => {
                warn!(name = %key, "Overwriting existing record with the same name");
                self.records[position] = record;
            }
            None => {
                debug!(name = %key, "Adding record");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Parse a record from its display form and insert it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidRecordFormat` if `text` is not a record, or
    /// `BookError::InvalidValue` if one of its fields is rejected. The book is
    /// unchanged on error.
    pub fn add_record_str(&mut self, text: &str) -> BookResult<()> {
        let record = text.parse::<Record>()?;
        self.add_record(record);
        Ok(())
    }

    /// All records whose name contains `needle` (case-sensitive), in book order.
    pub fn find_records(&self, needle: &str) -> Vec<&Record> {
        let found: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record.name().as_str().contains(needle))
            .collect();

        debug!(needle, matches = found.len(), "Searched records by name");
        found
    }

    /// Iterate over the book in pages of up to `page_size` records.
    ///
    /// Every call starts a fresh traversal. The last page may be shorter.
    ///
    /// # Errors
    ///
    /// Returns `BookError::InvalidPageSize` if `page_size` is zero.
    pub fn iter_pages(&self, page_size: usize) -> BookResult<Pages<'_>> {
        if page_size == 0 {
            return Err(BookError::InvalidPageSize(page_size));
        }

        Ok(Pages {
            chunks: self.records.chunks(page_size),
        })
    }

    /// Get the record stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&position| &self.records[position])
    }

    /// Whether a record is stored under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in book order.
    pub fn iter(&self) -> Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pages of records produced by [`AddressBook::iter_pages`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    chunks: Chunks<'a, Record>,
}

impl<'a> Iterator for Pages<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Pages<'_> {}
