//! Contact record: a name plus its phone numbers.

use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A phone argument as handed to [`ContactRecord::add_phone`] and
/// [`ContactRecord::remove_phone`].
///
/// The two variants have different removal semantics: a raw value drops
/// every matching entry, a validated value drops exactly one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneInput {
    /// Unvalidated text straight from the user.
    Raw(String),
    /// An already constructed phone number.
    Validated(PhoneNumber),
}

impl From<&str> for PhoneInput {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for PhoneInput {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<PhoneNumber> for PhoneInput {
    fn from(phone: PhoneNumber) -> Self {
        Self::Validated(phone)
    }
}

/// A single contact in the address book.
///
/// Phones keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with no phones. The name is not validated.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The first stored phone, if any.
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    /// Append a phone, validating raw input first.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` if a raw value is not ten digits.
    pub fn add_phone(&mut self, phone: impl Into<PhoneInput>) -> BookResult<()> {
        let phone = match phone.into() {
            PhoneInput::Raw(value) => PhoneNumber::new(value)?,
            PhoneInput::Validated(phone) => phone,
        };
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove phones matching the given value.
    ///
    /// A raw value removes every matching entry and never fails, even when
    /// nothing matches. A validated value removes only the first match.
    ///
    /// Returns the number of entries removed.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if a validated value is not present.
    pub fn remove_phone(&mut self, phone: impl Into<PhoneInput>) -> BookResult<usize> {
        match phone.into() {
            PhoneInput::Raw(value) => {
                let before = self.phones.len();
                self.phones.retain(|p| p.as_str() != value);
                Ok(before - self.phones.len())
            }
            PhoneInput::Validated(phone) => {
                let index = self
                    .phones
                    .iter()
                    .position(|p| *p == phone)
                    .ok_or_else(|| BookError::PhoneNotFound(phone.to_string()))?;
                self.phones.remove(index);
                Ok(1)
            }
        }
    }

    /// Replace every entry equal to `old` with a single `new` at the end.
    ///
    /// `new` is validated before anything is removed, so a failed edit
    /// leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if `old` is not stored
    /// - `BookError::Validation` if `new` is not ten digits
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        if !self.phones.iter().any(|p| p.as_str() == old) {
            return Err(BookError::PhoneNotFound(old.to_string()));
        }
        let new = PhoneNumber::new(new)?;
        self.remove_phone(old)?;
        self.add_phone(new)
    }

    /// Find the first phone equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone matches.
    pub fn find_phone(&self, value: &str) -> BookResult<&PhoneNumber> {
        self.phones
            .iter()
            .find(|p| p.as_str() == value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with(phones: &[&str]) -> ContactRecord {
        let mut record = ContactRecord::new("Alice");
        for phone in phones {
            record.add_phone(*phone).unwrap();
        }
        record
    }

    #[test]
    fn test_record_new_is_empty() {
        let record = ContactRecord::new("Alice");
        assert_eq!(record.name(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.first_phone().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let record = record_with(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = ContactRecord::new("Alice");
        let result = record.add_phone("123");
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_validated_phone() {
        let mut record = ContactRecord::new("Alice");
        let phone = PhoneNumber::new("1234567890").unwrap();
        record.add_phone(phone.clone()).unwrap();
        assert_eq!(record.first_phone(), Some(&phone));
    }

    #[test]
    fn test_remove_raw_drops_every_match() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        let removed = record.remove_phone("1111111111").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(record.phones().len(), 1);
        assert_eq!(record.phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn test_remove_raw_missing_is_noop() {
        let mut record = record_with(&["1111111111"]);
        assert_eq!(record.remove_phone("9999999999").unwrap(), 0);
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_validated_drops_one() {
        let mut record = record_with(&["1111111111", "2222222222", "1111111111"]);
        let phone = PhoneNumber::new("1111111111").unwrap();
        assert_eq!(record.remove_phone(phone).unwrap(), 1);
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_remove_validated_missing_fails() {
        let mut record = record_with(&["1111111111"]);
        let phone = PhoneNumber::new("9999999999").unwrap();
        assert!(matches!(
            record.remove_phone(phone),
            Err(BookError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn test_edit_phone_replaces_and_appends() {
        let mut record = record_with(&["1111111111", "2222222222"]);
        record.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["2222222222", "3333333333"]);
    }

    #[test]
    fn test_edit_phone_unknown_old_fails() {
        let mut record = record_with(&["1111111111"]);
        let result = record.edit_phone("9999999999", "3333333333");
        assert_eq!(
            result,
            Err(BookError::PhoneNotFound("9999999999".to_string()))
        );
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_record() {
        let mut record = record_with(&["1111111111"]);
        let result = record.edit_phone("1111111111", "abc");
        assert!(matches!(result, Err(BookError::Validation(_))));
        assert_eq!(record.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn test_find_phone() {
        let record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(
            record.find_phone("2222222222").unwrap().as_str(),
            "2222222222"
        );
        assert!(matches!(
            record.find_phone("3333333333"),
            Err(BookError::PhoneNotFound(_))
        ));
    }

    #[test]
    fn test_display() {
        let record = record_with(&["1111111111", "2222222222"]);
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1111111111, 2222222222"
        );
        assert_eq!(
            ContactRecord::new("Bob").to_string(),
            "Contact name: Bob, phones: "
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = record_with(&["1111111111"]);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Alice", "phones": ["1111111111"] })
        );
    }

    #[test]
    fn test_record_deserialization_validates_phones() {
        let ok: ContactRecord =
            serde_json::from_str(r#"{"name":"Bob","phones":["0987654321"]}"#).unwrap();
        assert_eq!(ok.name(), "Bob");

        let bad: Result<ContactRecord, _> =
            serde_json::from_str(r#"{"name":"Bob","phones":["098"]}"#);
        assert!(bad.is_err());
    }
}
