//! Data models for the address book.
//!
//! A [`ContactRecord`] holds a name and its phones; the [`AddressBook`]
//! owns every record, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{ContactRecord, PhoneInput};
