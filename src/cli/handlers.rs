//! Command handlers
//!
//! Runs parsed commands against the address book and turns both results and
//! errors into the text shown to the user.

use tracing::{debug, info};

use super::commands::{find_command, parse_input, Command, CommandAction, COMMANDS};
use crate::book::AddressBook;
use crate::config::Settings;
use crate::error::{PhonebookError, PhonebookResult};
use crate::models::Record;

/// Reply for unrecognised command words
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Reply printed when the session ends
pub const FAREWELL: &str = "Good bye!";

/// What the prompt loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Reply(String),
    /// Print the text and stop
    Exit(String),
}

/// Parse and run one input line
///
/// Blank lines yield `None`. A failed command is answered with its error's
/// `Display` text, which is one template per error kind:
///
/// - validation: the validator's fixed message (one for phones, one for dates)
/// - not found: `"{entity} not found: {identifier}"`
/// - argument count: `"Invalid number of arguments for '{command}'. Usage: {usage}"`
pub fn execute(book: &mut AddressBook, settings: &Settings, line: &str) -> Option<Outcome> {
    let (word, args) = parse_input(line)?;

    let Some(command) = find_command(&word) else {
        debug!(command = %word, "Unknown command");
        return Some(Outcome::Reply(INVALID_COMMAND.to_string()));
    };

    debug!(command = command.name, args = args.len(), "Running command");
    match handle_command(book, settings, command, &args) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            info!(command = command.name, error = %err, "Command failed");
            Some(Outcome::Reply(err.to_string()))
        }
    }
}

/// Run a single command
pub fn handle_command(
    book: &mut AddressBook,
    settings: &Settings,
    command: &Command,
    args: &[&str],
) -> PhonebookResult<Outcome> {
    let reply = match command.action {
        CommandAction::Hello => "How can I help you?".to_string(),

        CommandAction::AddContact => {
            let [name, phone] = command.args::<2>(args)?;
            match book.find_mut(name) {
                Some(record) => {
                    record.add_phone(phone)?;
                    "Contact updated.".to_string()
                }
                None => {
                    let mut record = Record::new(name);
                    record.add_phone(phone)?;
                    book.add_record(record);
                    "Contact added.".to_string()
                }
            }
        }

        CommandAction::ChangePhone => {
            let [name, phone] = command.args::<2>(args)?;
            let record = book
                .find_mut(name)
                .ok_or_else(|| PhonebookError::contact_not_found(name))?;
            let old = record
                .first_phone()
                .ok_or_else(|| PhonebookError::phone_not_found(name))?
                .to_string();
            record.edit_phone(&old, phone)?;
            "Contact changed.".to_string()
        }

        CommandAction::ShowPhone => {
            let [name] = command.args::<1>(args)?;
            let record = book
                .find(name)
                .ok_or_else(|| PhonebookError::contact_not_found(name))?;
            let phone = record
                .first_phone()
                .ok_or_else(|| PhonebookError::phone_not_found(name))?;
            format!("Phone number for contact '{}': {}", name, phone)
        }

        CommandAction::RemovePhone => {
            let [name, phone] = command.args::<2>(args)?;
            let record = book
                .find_mut(name)
                .ok_or_else(|| PhonebookError::contact_not_found(name))?;
            if record.find_phone(phone).is_none() {
                return Err(PhonebookError::phone_not_found(phone));
            }
            record.remove_phone(phone);
            "Phone removed.".to_string()
        }

        CommandAction::ShowAll => {
            if book.is_empty() {
                "No contacts found.".to_string()
            } else {
                book.records()
                    .map(Record::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }

        CommandAction::DeleteContact => {
            let [name] = command.args::<1>(args)?;
            book.delete(name)?;
            "Contact deleted.".to_string()
        }

        CommandAction::AddBirthday => {
            let [name, date] = command.args::<2>(args)?;
            book.find_mut(name)
                .ok_or_else(|| PhonebookError::contact_not_found(name))?
                .set_birthday(date)?;
            "Birthday added.".to_string()
        }

        CommandAction::ShowBirthday => {
            let [name] = command.args::<1>(args)?;
            let birthday = book
                .find(name)
                .ok_or_else(|| PhonebookError::contact_not_found(name))?
                .birthday()
                .ok_or_else(|| PhonebookError::birthday_not_found(name))?;
            format!("Birthday for contact '{}': {}", name, birthday)
        }

        CommandAction::UpcomingBirthdays => {
            let upcoming =
                book.upcoming_birthdays_within(settings.today(), settings.upcoming_days);
            if upcoming.is_empty() {
                "No upcoming birthdays.".to_string()
            } else {
                upcoming
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }

        CommandAction::Help => format_help(),

        CommandAction::Exit => return Ok(Outcome::Exit(FAREWELL.to_string())),
    };

    Ok(Outcome::Reply(reply))
}

/// Format the command list
fn format_help() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let mut output = String::from("Available commands:");
    for cmd in COMMANDS {
        output.push_str(&format!(
            "\n  {:<width$}  {}",
            cmd.usage,
            cmd.description,
            width = width
        ));
    }
    output
}
