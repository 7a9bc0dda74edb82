//! Error types for the phonebook.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by the address book and the command layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact is stored under this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// The record does not hold this phone number
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// The record exists but has no phone numbers at all
    #[error("Contact {0} has no phone numbers")]
    NoPhones(String),

    /// Wrong number of arguments for a command
    #[error("Command '{command}' expects {expected} argument(s), got {got}")]
    Arguments {
        command: String,
        expected: usize,
        got: usize,
    },

    /// The input line had no tokens
    #[error("Empty input")]
    EmptyInput,
}

impl BookError {
    /// True for lookup misses (unknown contact or phone).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }

    /// True for malformed input: bad phone, wrong arity, missing phone.
    pub fn is_bad_input(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Arguments { .. } | Self::NoPhones(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
