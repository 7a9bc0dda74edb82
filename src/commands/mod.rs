//! Command parsing and dispatch.
//!
//! A line of input is split by [`parse`], mapped to a [`Command`], and routed
//! to its handler through [`input_error`], which collapses domain failures
//! into the two fixed messages the user sees.

pub mod handlers;
pub mod parser;

pub use parser::parse;

use crate::error::BookResult;
use crate::models::AddressBook;
use tracing::{debug, warn};

/// Reply for any lookup miss.
pub const ENTER_USER_NAME: &str = "Enter user name";

/// Reply for a malformed phone or wrong argument count.
pub const GIVE_NAME_AND_PHONE: &str = "Give me name and phone please.";

pub const INVALID_COMMAND: &str =
    "Invalid command. Type 'commands' for a list of available commands.";

pub const GOODBYE: &str = "Goodbye!";

/// Signature shared by every command handler.
pub type Handler = fn(&[String], &mut AddressBook) -> BookResult<String>;

/// Map lookup and input failures to their user-facing replies.
///
/// Anything else is passed through untouched.
pub fn translate(result: BookResult<String>) -> BookResult<String> {
    match result {
        Err(e) if e.is_not_found() => {
            debug!(error = %e, "Lookup failed");
            Ok(ENTER_USER_NAME.to_string())
        }
        Err(e) if e.is_bad_input() => {
            debug!(error = %e, "Bad input");
            Ok(GIVE_NAME_AND_PHONE.to_string())
        }
        other => other,
    }
}

/// Wrap a handler so its failures go through [`translate`].
pub fn input_error(
    handler: Handler,
) -> impl Fn(&[String], &mut AddressBook) -> BookResult<String> {
    move |args: &[String], book: &mut AddressBook| translate(handler(args, book))
}

/// Every command word the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Change,
    Phone,
    Search,
    All,
    Commands,
    Exit,
    Unknown,
}

impl Command {
    /// Match an already lowercased command word.
    pub fn from_word(word: &str) -> Self {
        match word {
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "search" => Self::Search,
            "all" => Self::All,
            "commands" => Self::Commands,
            "exit" | "close" => Self::Exit,
            _ => Self::Unknown,
        }
    }

    /// The handler for this command, if it has one.
    pub fn handler(self) -> Option<Handler> {
        let handler: Handler = match self {
            Self::Add => handlers::add_contact,
            Self::Change => handlers::change_contact,
            Self::Phone => handlers::show_phone,
            Self::Search => handlers::search_contact,
            Self::All => handlers::show_all_contacts,
            Self::Commands => handlers::show_commands,
            Self::Exit | Self::Unknown => return None,
        };
        Some(handler)
    }
}

/// Result of dispatching one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep going.
    Reply(String),
    /// Print the text and stop.
    Exit(String),
}

/// Routes input lines to command handlers against a single address book.
#[derive(Debug, Default)]
pub struct CommandDispatcher {
    book: AddressBook,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher over an existing address book.
    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Parse and run one input line.
    ///
    /// # Errors
    ///
    /// Returns `BookError::EmptyInput` for a blank line. Handler failures are
    /// translated into replies and never surface here.
    pub fn dispatch(&mut self, line: &str) -> BookResult<Outcome> {
        let (word, args) = parse(line)?;
        let command = Command::from_word(&word);
        debug!(?command, args = args.len(), "Dispatching");

        if command == Command::Exit {
            return Ok(Outcome::Exit(GOODBYE.to_string()));
        }

        match command.handler() {
            Some(handler) => input_error(handler)(&args, &mut self.book).map(Outcome::Reply),
            None => {
                warn!(command = %word, "Unknown command");
                Ok(Outcome::Reply(INVALID_COMMAND.to_string()))
            }
        }
    }
}
