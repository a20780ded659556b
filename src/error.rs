//! Custom error types for the phonebook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for phonebook operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhonebookError {
    /// A phone number or date failed validation
    #[error("{0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A command received too few arguments
    #[error("Invalid number of arguments for '{command}'. Usage: {usage}")]
    Argument {
        command: &'static str,
        usage: &'static str,
    },

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl PhonebookError {
    /// Create a "not found" error for contacts
    pub fn contact_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Contact",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a contact without a birthday
    pub fn birthday_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Birthday",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for a contact without phone numbers
    pub fn phone_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Phone number",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an argument count error
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument { .. })
    }
}

impl From<std::io::Error> for PhonebookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for phonebook operations
pub type PhonebookResult<T> = Result<T, PhonebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = PhonebookError::contact_not_found("Ann");
        assert_eq!(err.to_string(), "Contact not found: Ann");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_argument_error() {
        let err = PhonebookError::Argument {
            command: "add",
            usage: "add <name> <phone>",
        };
        assert_eq!(
            err.to_string(),
            "Invalid number of arguments for 'add'. Usage: add <name> <phone>"
        );
        assert!(err.is_argument());
    }

    #[test]
    fn test_validation_error_display() {
        let err = PhonebookError::Validation("Invalid phone number format".into());
        assert_eq!(err.to_string(), "Invalid phone number format");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PhonebookError = io_err.into();
        assert!(matches!(err, PhonebookError::Io(_)));
    }
}
