//! Contact record model
//!
//! A record holds one contact: a fixed name, an ordered list of phone numbers
//! and an optional birthday.

use std::fmt;

use super::birthday::BirthdayDate;
use super::phone::PhoneNumber;
use crate::error::PhonebookResult;

/// A single contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a contact with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Contact name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone numbers in insertion order
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The first phone number added, if any
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    /// The birthday, if set
    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number
    ///
    /// Duplicates are allowed.
    pub fn add_phone(&mut self, value: &str) -> PhonebookResult<()> {
        let phone = PhoneNumber::parse(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// `new` is validated before anything else. When `old` is not present the
    /// record is left untouched and no error is returned.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> PhonebookResult<()> {
        let new = PhoneNumber::parse(new)?;
        if let Some(slot) = self.phones.iter_mut().find(|p| **p == old) {
            *slot = new;
        }
        Ok(())
    }

    /// Remove every phone equal to `value`
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| *p != value);
    }

    /// Find a phone by value
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| **p == value)
    }

    /// Parse and store the birthday, replacing any previous one
    pub fn set_birthday(&mut self, value: &str) -> PhonebookResult<()> {
        self.birthday = Some(BirthdayDate::parse(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phones(record: &Record) -> Vec<&str> {
        record.phones().iter().map(PhoneNumber::as_str).collect()
    }

    #[test]
    fn test_new_record() {
        let record = Record::new("Ann");
        assert_eq!(record.name(), "Ann");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
        assert!(record.first_phone().is_none());
    }

    #[test]
    fn test_add_phone_keeps_order_and_duplicates() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();
        assert_eq!(phones(&record), ["1111111111", "2222222222", "1111111111"]);
        assert_eq!(record.first_phone().unwrap().as_str(), "1111111111");
    }

    #[test]
    fn test_add_invalid_phone() {
        let mut record = Record::new("Ann");
        let err = record.add_phone("12345").unwrap_err();
        assert!(err.is_validation());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phones(&record), ["3333333333", "2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_missing_phone_is_noop() {
        let mut record = Record::new("Ann");
        record.add_phone("5555555555").unwrap();

        record.edit_phone("0000000000", "1111111111").unwrap();
        assert_eq!(phones(&record), ["5555555555"]);
    }

    #[test]
    fn test_edit_phone_validates_new_value() {
        let mut record = Record::new("Ann");
        record.add_phone("5555555555").unwrap();

        let err = record.edit_phone("5555555555", "not-a-phone").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(phones(&record), ["5555555555"]);
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        record.remove_phone("1111111111");
        assert_eq!(phones(&record), ["2222222222"]);

        record.remove_phone("9999999999");
        assert_eq!(phones(&record), ["2222222222"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("Ann");
        record.add_phone("1111111111").unwrap();
        assert_eq!(record.find_phone("1111111111").unwrap().as_str(), "1111111111");
        assert!(record.find_phone("2222222222").is_none());
    }

    #[test]
    fn test_set_birthday_overwrites() {
        let mut record = Record::new("Ann");
        record.set_birthday("12.06.1990").unwrap();
        record.set_birthday("13.07.1991").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "13.07.1991");

        assert!(record.set_birthday("1991-07-13").unwrap_err().is_validation());
        assert_eq!(record.birthday().unwrap().to_string(), "13.07.1991");
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("Ann");
        assert_eq!(record.to_string(), "Contact name: Ann, phones: ");

        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, phones: 1111111111; 2222222222"
        );

        record.set_birthday("12.06.1990").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Ann, phones: 1111111111; 2222222222, birthday: 12.06.1990"
        );
    }
}
