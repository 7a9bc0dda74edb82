//! The keyed collection of contact records.

use super::record::ContactRecord;
use crate::error::{BookError, BookResult};
use tracing::debug;

/// All contacts, keyed by name.
///
/// Iteration follows the order in which each name was first added.
/// Re-adding an existing name replaces the record in place.
///
/// Lookups are a linear scan over the records in order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    /// Insert a record under its own name; last write wins.
    pub fn add_record(&mut self, record: ContactRecord) {
        match self.position(record.name()) {
            Some(index) => {
                debug!(contact = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                debug!(contact = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if the name is absent.
    pub fn find(&self, name: &str) -> BookResult<&ContactRecord> {
        self.records
            .iter()
            .find(|r| r.name() == name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Look up a record by name for modification.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if the name is absent.
    pub fn find_mut(&mut self, name: &str) -> BookResult<&mut ContactRecord> {
        self.records
            .iter_mut()
            .find(|r| r.name() == name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))
    }

    /// Remove a record, returning it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if the name is absent.
    pub fn delete(&mut self, name: &str) -> BookResult<ContactRecord> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
        debug!(contact = %name, "Deleting record");
        Ok(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Iterate records in insertion order.
    pub fn all_records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }
}
