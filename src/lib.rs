//! Phonebook - an interactive command-line address book.
//!
//! Contacts are stored by name with one or more validated ten-digit phone
//! numbers, and are managed through a small set of text commands read from
//! a read-eval-print loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`)
//! - **models**: `ContactRecord` and the `AddressBook` that owns them
//! - **commands**: Input parsing, command handlers, and error translation
//! - **repl**: The read-eval-print loop over any reader/writer pair
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use commands::{CommandDispatcher, Outcome};
pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, ContactRecord, PhoneInput};
pub use repl::run_repl;
