//! Phonebook - terminal assistant bot for contacts
//!
//! This library provides the core of the phonebook assistant: an in-memory
//! address book of contacts with validated phone numbers and birthdays, and
//! an interactive command loop on top of it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Contact records and their validated value types
//! - `book`: The address book and the upcoming birthdays query
//! - `config`: Runtime settings
//! - `cli`: Command table, handlers and the prompt loop
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use phonebook::{AddressBook, Record};
//!
//! let mut ann = Record::new("Ann");
//! ann.add_phone("0501234567")?;
//! ann.set_birthday("12.06.1990")?;
//!
//! let mut book = AddressBook::new();
//! book.add_record(ann);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let upcoming = book.get_upcoming_birthdays(today);
//! assert_eq!(upcoming[0].to_string(), "Ann: 12.06.2024");
//! # Ok::<(), phonebook::PhonebookError>(())
//! ```

pub mod book;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday};
pub use error::{PhonebookError, PhonebookResult};
pub use models::{BirthdayDate, PhoneNumber, Record};
