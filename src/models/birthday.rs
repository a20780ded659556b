//! Birthday date type
//!
//! Birthdays are entered and displayed as `DD.MM.YYYY`. Besides parsing, this
//! module knows how to place a birthday on the calendar of a given year, which
//! is what the upcoming-birthdays query is built on.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

use crate::error::PhonebookError;

/// Input and display format for birthdays
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's date of birth
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from a `DD.MM.YYYY` string
    ///
    /// # Examples
    /// ```
    /// use phonebook::models::BirthdayDate;
    /// let birthday = BirthdayDate::parse("12.06.1990").unwrap();
    /// assert_eq!(birthday.to_string(), "12.06.1990");
    /// assert!(BirthdayDate::parse("1990-06-12").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, BirthdayParseError> {
        let invalid = || BirthdayParseError::InvalidFormat(s.to_string());

        // chrono's %Y takes any number of digits and a sign
        let year = s.rsplit_once('.').map(|(_, year)| year).unwrap_or_default();
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT).map_err(|_| invalid())?;
        if date.year() < 1 {
            return Err(invalid());
        }
        Ok(Self(date))
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday falls on in `year`
    ///
    /// A Feb 29 birthday is observed on Mar 1 in years without a leap day.
    /// Returns `None` only when `year` is outside the representable range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }

    /// The first occurrence of this birthday on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.occurrence_in(today.year())?;
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

impl FromStr for BirthdayDate {
    type Err = BirthdayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Error parsing a birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayParseError {
    InvalidFormat(String),
}

impl fmt::Display for BirthdayParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for BirthdayParseError {}

impl From<BirthdayParseError> for PhonebookError {
    fn from(err: BirthdayParseError) -> Self {
        Self::Validation(err.to_string())
    }
}
