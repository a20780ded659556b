//! Property-based tests for phone number and birthday validation

use chrono::NaiveDate;
use phonebook::models::{BirthdayDate, PhoneNumber};
use phonebook::PhonebookError;
use proptest::prelude::*;

/// Days since the common era for 0001-01-01 and 9999-12-31
const FIRST_DAY: i32 = 1;
const LAST_DAY: i32 = 3_652_059;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (FIRST_DAY..=LAST_DAY).prop_map(|days| {
        NaiveDate::from_num_days_from_ce_opt(days).expect("day within 1..=9999")
    })
}

fn is_phone_shaped(s: &str) -> bool {
    s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Property: any ten ASCII digits form a phone number that keeps its value.
#[test]
fn prop_ten_digit_phone_round_trips() {
    proptest!(|(digits in "[0-9]{10}")| {
        let phone = PhoneNumber::parse(&digits).unwrap();
        prop_assert_eq!(phone.as_str(), digits.as_str());
        prop_assert_eq!(phone.to_string(), digits);
    });
}

/// Property: too short or too long digit strings are rejected.
#[test]
fn prop_wrong_length_phone_rejected() {
    proptest!(|(digits in "[0-9]{0,9}|[0-9]{11,20}")| {
        let err: PhonebookError = PhoneNumber::parse(&digits).unwrap_err().into();
        prop_assert!(err.is_validation());
    });
}

/// Property: a non-digit anywhere makes the phone invalid.
#[test]
fn prop_phone_with_non_digit_rejected() {
    proptest!(|(value in "[0-9]{0,9}[^0-9][0-9]{0,9}")| {
        prop_assert!(PhoneNumber::parse(&value).is_err());
    });
}

/// Property: arbitrary text is accepted exactly when it is ten ASCII digits.
#[test]
fn prop_phone_accepts_only_ten_ascii_digits() {
    proptest!(|(value in any::<String>())| {
        prop_assert_eq!(PhoneNumber::parse(&value).is_ok(), is_phone_shaped(&value));
    });
}

/// Property: every date in years 1..=9999 written as DD.MM.YYYY parses back
/// to the same date and renders to the same string.
#[test]
fn prop_birthday_round_trips() {
    proptest!(|(date in date_strategy())| {
        let text = date.format("%d.%m.%Y").to_string();
        let birthday = BirthdayDate::parse(&text).unwrap();
        prop_assert_eq!(birthday.date(), date);
        prop_assert_eq!(birthday.to_string(), text);
    });
}

/// Property: a year that is not exactly four digits is rejected.
#[test]
fn prop_birthday_year_must_have_four_digits() {
    proptest!(|(value in "(0[1-9]|1[0-9]|2[0-8])\\.(0[1-9]|1[0-2])\\.([0-9]{1,3}|[0-9]{5,7}|-[0-9]{1,4}|\\+[0-9]{4})")| {
        let err: PhonebookError = BirthdayDate::parse(&value).unwrap_err().into();
        prop_assert!(err.is_validation());
    });
}
