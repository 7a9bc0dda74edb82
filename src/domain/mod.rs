//! Domain value objects.
//!
//! Value objects validate at construction time so that an invalid phone
//! number can never be represented inside the address book.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
