//! Shared fixtures for integration tests.

use phonebook::{run_repl, AddressBook, CommandDispatcher, ContactRecord, Outcome};
use std::io::Cursor;

/// Prompt used by every scripted session.
pub const PROMPT: &str = "> ";

/// Create a record with the given phones already added.
#[allow(dead_code)]
pub fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name);
    for phone in phones {
        record
            .add_phone(*phone)
            .expect("fixture phones must be valid");
    }
    record
}

/// Create a book holding Alice and Bob, in that order.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record("Alice", &["1234567890"]));
    book.add_record(sample_record("Bob", &["0987654321"]));
    book
}

/// Dispatch a line and return the reply text, panicking on exit or error.
#[allow(dead_code)]
pub fn reply(dispatcher: &mut CommandDispatcher, line: &str) -> String {
    match dispatcher.dispatch(line) {
        Ok(Outcome::Reply(text)) => text,
        other => panic!("expected a reply to {:?}, got {:?}", line, other),
    }
}

/// Run a full scripted session and return everything written to stdout,
/// with prompts stripped so each reply sits on its own line.
#[allow(dead_code)]
pub fn run_session(dispatcher: &mut CommandDispatcher, script: &str) -> Vec<String> {
    let mut output = Vec::new();
    run_repl(dispatcher, Cursor::new(script), &mut output, PROMPT).expect("session failed");
    String::from_utf8(output)
        .expect("output must be UTF-8")
        .replace(PROMPT, "")
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
