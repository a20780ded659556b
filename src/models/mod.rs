//! Core data models for the phonebook
//!
//! Contacts and the validated value types they are built from.

pub mod birthday;
pub mod phone;
pub mod record;

pub use birthday::{BirthdayDate, BirthdayParseError};
pub use phone::{PhoneNumber, PhoneParseError};
pub use record::Record;
