//! Interactive prompt loop
//!
//! Reads commands line by line and writes replies until the user exits or the
//! input ends. Generic over reader and writer so sessions can be scripted.

use std::io::{BufRead, Write};
use tracing::info;

use super::handlers::{execute, Outcome, FAREWELL};
use crate::book::AddressBook;
use crate::config::Settings;
use crate::error::PhonebookResult;

/// Banner printed when the session starts
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before every command
pub const PROMPT: &str = "Enter a command: ";

/// Run a session until `exit`/`close` or end of input
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    book: &mut AddressBook,
    settings: &Settings,
) -> PhonebookResult<()> {
    writeln!(output, "{}", WELCOME)?;

    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("End of input, closing session");
            writeln!(output)?;
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        match execute(book, settings, &line) {
            Some(Outcome::Reply(text)) => writeln!(output, "{}", text)?,
            Some(Outcome::Exit(text)) => {
                writeln!(output, "{}", text)?;
                break;
            }
            None => {}
        }
    }

    output.flush()?;
    Ok(())
}
