//! Read-eval-print loop driving the command dispatcher.
//!
//! The loop is generic over its reader and writer so the binary can run it
//! on stdin/stdout while tests feed it in-memory buffers.

use crate::commands::{CommandDispatcher, Outcome, GOODBYE};
use crate::error::BookError;
use anyhow::Result;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Run the REPL until `exit`/`close` or end of input.
///
/// Blank lines are skipped. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD and the line is dispatched as usual. On end of input the loop
/// prints a newline (to finish the pending prompt) and the farewell, then
/// returns normally.
///
/// # Arguments
/// * `dispatcher` - Owns the address book for the session
/// * `reader` - Source of input lines
/// * `writer` - Destination for prompts and replies
/// * `prompt` - Text written before each read
///
/// # Returns
/// An error only if reading or writing fails
pub fn run_repl<R, W>(
    dispatcher: &mut CommandDispatcher,
    mut reader: R,
    mut writer: W,
    prompt: &str,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(writer, "{}", prompt)?;
        writer.flush()?;

        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            info!("End of input, leaving REPL");
            writeln!(writer)?;
            writeln!(writer, "{}", GOODBYE)?;
            return Ok(());
        }

        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            warn!("Input line is not valid UTF-8, invalid bytes replaced");
        }

        match dispatcher.dispatch(&line) {
            Ok(Outcome::Reply(text)) => writeln!(writer, "{}", text)?,
            Ok(Outcome::Exit(text)) => {
                writeln!(writer, "{}", text)?;
                info!("Exit requested");
                return Ok(());
            }
            Err(BookError::EmptyInput) => debug!("Skipping blank line"),
            Err(e) => return Err(e.into()),
        }
    }
}
