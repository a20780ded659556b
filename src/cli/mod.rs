//! Command-line front end
//!
//! This module contains the interactive assistant: the command table, the
//! handlers bridging commands to the address book, and the prompt loop.

pub mod commands;
pub mod handlers;
pub mod repl;

pub use commands::{find_command, parse_input, Command, CommandAction, COMMANDS};
pub use handlers::{execute, handle_command, Outcome};
pub use repl::run;
