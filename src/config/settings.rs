//! Runtime settings
//!
//! Controls the reference date and look-ahead window of the upcoming
//! birthdays report.

use chrono::NaiveDate;

use crate::book::DEFAULT_UPCOMING_DAYS;

/// Settings for a phonebook session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Look-ahead window for the `birthdays` command, in days
    pub upcoming_days: i64,

    /// Fixed reference date; the local date is used when unset
    pub today: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            upcoming_days: DEFAULT_UPCOMING_DAYS,
            today: None,
        }
    }
}

impl Settings {
    /// Pin the reference date
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Change the look-ahead window
    pub fn with_upcoming_days(mut self, days: i64) -> Self {
        self.upcoming_days = days;
        self
    }

    /// The date birthday distances are measured from
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
