//! Input line tokenizer.

use crate::error::{BookError, BookResult};

/// Split a raw line into a lowercased command word and its arguments.
///
/// Arguments keep their original case.
///
/// # Errors
///
/// Returns `BookError::EmptyInput` if the line has no tokens.
pub fn parse(line: &str) -> BookResult<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or(BookError::EmptyInput)?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Ok((command, args))
}
