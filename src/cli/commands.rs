//! Command definitions for the interactive prompt
//!
//! Defines every command the assistant understands and how an input line is
//! split into a command word and its arguments.

use crate::error::{PhonebookError, PhonebookResult};

/// A command that can be typed at the prompt
#[derive(Debug, Clone)]
pub struct Command {
    /// Command name (what user types)
    pub name: &'static str,
    /// Usage line shown in help and argument errors
    pub usage: &'static str,
    /// Short description
    pub description: &'static str,
    /// Command action
    pub action: CommandAction,
}

/// Actions that commands can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    // Contacts
    AddContact,
    ChangePhone,
    ShowPhone,
    RemovePhone,
    ShowAll,
    DeleteContact,

    // Birthdays
    AddBirthday,
    ShowBirthday,
    UpcomingBirthdays,

    // General
    Hello,
    Help,
    Exit,
}

/// All available commands
pub static COMMANDS: &[Command] = &[
    Command {
        name: "hello",
        usage: "hello",
        description: "Greet the assistant",
        action: CommandAction::Hello,
    },
    Command {
        name: "add",
        usage: "add <name> <phone>",
        description: "Add a contact or append a phone to an existing one",
        action: CommandAction::AddContact,
    },
    Command {
        name: "change",
        usage: "change <name> <phone>",
        description: "Replace the contact's first phone",
        action: CommandAction::ChangePhone,
    },
    Command {
        name: "phone",
        usage: "phone <name>",
        description: "Show the contact's first phone",
        action: CommandAction::ShowPhone,
    },
    Command {
        name: "remove-phone",
        usage: "remove-phone <name> <phone>",
        description: "Remove a phone from a contact",
        action: CommandAction::RemovePhone,
    },
    Command {
        name: "all",
        usage: "all",
        description: "Show all contacts",
        action: CommandAction::ShowAll,
    },
    Command {
        name: "delete",
        usage: "delete <name>",
        description: "Delete a contact",
        action: CommandAction::DeleteContact,
    },
    Command {
        name: "add-birthday",
        usage: "add-birthday <name> <DD.MM.YYYY>",
        description: "Set the contact's birthday",
        action: CommandAction::AddBirthday,
    },
    Command {
        name: "show-birthday",
        usage: "show-birthday <name>",
        description: "Show the contact's birthday",
        action: CommandAction::ShowBirthday,
    },
    Command {
        name: "birthdays",
        usage: "birthdays",
        description: "List birthdays in the coming week",
        action: CommandAction::UpcomingBirthdays,
    },
    Command {
        name: "help",
        usage: "help",
        description: "Show this list",
        action: CommandAction::Help,
    },
    Command {
        name: "close",
        usage: "close",
        description: "Quit",
        action: CommandAction::Exit,
    },
    Command {
        name: "exit",
        usage: "exit",
        description: "Quit",
        action: CommandAction::Exit,
    },
];

impl Command {
    /// Take the first `N` arguments, ignoring any extras
    ///
    /// Fails with an argument error when fewer than `N` were given.
    pub fn args<'a, const N: usize>(&self, args: &[&'a str]) -> PhonebookResult<[&'a str; N]> {
        args.get(..N)
            .and_then(|slice| <[&'a str; N]>::try_from(slice).ok())
            .ok_or(PhonebookError::Argument {
                command: self.name,
                usage: self.usage,
            })
    }
}

/// Find a command by name (case-insensitive)
pub fn find_command(name: &str) -> Option<&'static Command> {
    let name = name.to_lowercase();
    COMMANDS.iter().find(|cmd| cmd.name == name)
}

/// Split an input line into a lowercase command word and its arguments
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}
