//! Address book
//!
//! Holds every contact keyed by name. Records keep the order in which their
//! names were first added; re-adding a name replaces the record in place.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::error::{PhonebookError, PhonebookResult};
use crate::models::birthday::BIRTHDAY_FORMAT;
use crate::models::Record;

/// Default look-ahead for the upcoming birthdays query, in days
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// A contact whose birthday falls inside the look-ahead window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The day the birthday is celebrated
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(BIRTHDAY_FORMAT))
    }
}

/// All contacts, keyed by name
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    /// Index: name -> position in `records`
    by_name: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any record with the same name
    pub fn add_record(&mut self, record: Record) {
        match self.by_name.get(record.name()) {
            Some(&index) => {
                debug!(name = record.name(), "Replacing contact");
                self.records[index] = record;
            }
            None => {
                debug!(name = record.name(), "Adding contact");
                self.by_name
                    .insert(record.name().to_string(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Look up a record by name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.by_name.get(name).map(|&index| &self.records[index])
    }

    /// Look up a record by name for modification
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        match self.by_name.get(name) {
            Some(&index) => self.records.get_mut(index),
            None => None,
        }
    }

    /// Remove a record by name, returning it
    pub fn delete(&mut self, name: &str) -> PhonebookResult<Record> {
        let index = self
            .by_name
            .remove(name)
            .ok_or_else(|| PhonebookError::contact_not_found(name))?;

        let removed = self.records.remove(index);
        for position in self.by_name.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }

        debug!(name, "Deleted contact");
        Ok(removed)
    }

    /// Iterate over records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Number of contacts
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no contacts
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts with a birthday in the seven days starting at `today`
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_UPCOMING_DAYS)
    }

    /// Contacts whose next birthday is at most `days` days after `today`
    ///
    /// Results follow the book's insertion order, not the calendar.
    pub fn upcoming_birthdays_within(&self, today: NaiveDate, days: i64) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let date = record.birthday()?.next_occurrence(today)?;
                let distance = (date - today).num_days();
                (0..=days).contains(&distance).then(|| UpcomingBirthday {
                    name: record.name().to_string(),
                    date,
                })
            })
            .collect()
    }
}
