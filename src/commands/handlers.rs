//! Command handlers.
//!
//! Each handler takes the parsed arguments and the address book and returns
//! the text to print. Failures come back as [`BookError`] and are turned into
//! user-facing strings by [`super::input_error`].

use crate::error::{BookError, BookResult};
use crate::models::{AddressBook, ContactRecord};
use tracing::{debug, info};

pub const EMPTY_BOOK: &str = "Phone book is empty.";

pub const HELP_TEXT: &str = "Available commands:\n\
    add <name> <phone_number>: Add a new contact with the given name and phone number.\n\
    change <name> <new_phone_number>: Change the phone number for the contact with the given name.\n\
    phone <name>: Show the phone number for the contact with the given name.\n\
    search <name>: Search for a contact by name.\n\
    all: Show all contacts.\n\
    close or exit: Exit the program.";

/// Check the argument count for a command.
fn expect_args<'a, const N: usize>(
    command: &str,
    args: &'a [String],
) -> BookResult<&'a [String; N]> {
    args.try_into().map_err(|_| BookError::Arguments {
        command: command.to_string(),
        expected: N,
        got: args.len(),
    })
}

/// First stored phone of a contact, as display text.
fn first_phone(record: &ContactRecord) -> BookResult<String> {
    record
        .first_phone()
        .map(ToString::to_string)
        .ok_or_else(|| BookError::NoPhones(record.name().to_string()))
}

/// `add <name> <phone>`
pub fn add_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, phone] = expect_args::<2>("add", args)?;

    if book.contains(name) {
        return Ok(format!("Contact {} already exists.", name));
    }

    let mut record = ContactRecord::new(name.as_str());
    record.add_phone(phone.as_str())?;
    book.add_record(record);
    info!(contact = %name, "Contact added");

    Ok(format!(
        "Contact {} with phone number {} has been added.",
        name, phone
    ))
}

/// `change <name> <new_phone>`
///
/// Replaces the contact's first stored phone. A contact without phones
/// simply gets the new one.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name, new_phone] = expect_args::<2>("change", args)?;

    let Ok(record) = book.find_mut(name) else {
        return Ok(format!("Contact {} not found.", name));
    };

    match record.first_phone().map(|p| p.as_str().to_string()) {
        Some(old) => record.edit_phone(&old, new_phone)?,
        None => record.add_phone(new_phone.as_str())?,
    }
    info!(contact = %name, "Phone changed");

    Ok(format!(
        "Phone number for {} has been changed to {}.",
        name, new_phone
    ))
}

/// `phone <name>`
pub fn show_phone(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name] = expect_args::<1>("phone", args)?;

    let Ok(record) = book.find(name) else {
        return Ok(format!("Contact {} not found.", name));
    };

    let phone = first_phone(record)?;
    Ok(format!("Phone number for {} is {}.", name, phone))
}

/// `search <name>`
pub fn search_contact(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    let [name] = expect_args::<1>("search", args)?;

    let Ok(record) = book.find(name) else {
        return Ok(format!("No contact with the name {} found.", name));
    };

    let phone = first_phone(record)?;
    Ok(format!("Phone number for {} is {}.", name, phone))
}

/// `all`
pub fn show_all_contacts(args: &[String], book: &mut AddressBook) -> BookResult<String> {
    expect_args::<0>("all", args)?;

    if book.is_empty() {
        return Ok(EMPTY_BOOK.to_string());
    }

    debug!(count = book.len(), "Listing contacts");
    let lines: Vec<String> = book.all_records().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

/// `commands`
pub fn show_commands(_args: &[String], _book: &mut AddressBook) -> BookResult<String> {
    Ok(HELP_TEXT.to_string())
}
