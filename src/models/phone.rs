//! Phone number type
//!
//! A phone number is exactly ten ASCII digits. Values are validated once at
//! construction and never change afterwards.

use std::fmt;
use std::str::FromStr;

use crate::error::PhonebookError;

/// Number of digits in a valid phone number
pub const PHONE_DIGITS: usize = 10;

/// A validated ten-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a phone number from a string
    ///
    /// # Examples
    /// ```
    /// use phonebook::models::PhoneNumber;
    /// let phone = PhoneNumber::parse("0501234567").unwrap();
    /// assert_eq!(phone.as_str(), "0501234567");
    /// assert!(PhoneNumber::parse("12345").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PhoneParseError> {
        if s.len() != PHONE_DIGITS || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneParseError::InvalidFormat(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// Get the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = PhoneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PhoneNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Error parsing a phone number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneParseError {
    InvalidFormat(String),
}

impl fmt::Display for PhoneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(_) => write!(
                f,
                "Invalid phone number format. Use {} digits",
                PHONE_DIGITS
            ),
        }
    }
}

impl std::error::Error for PhoneParseError {}

impl From<PhoneParseError> for PhonebookError {
    fn from(err: PhoneParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
