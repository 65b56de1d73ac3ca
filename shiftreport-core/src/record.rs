//! The weekend shift record and its weekday label.

use std::fmt;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The two weekday values a shift record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeekendDay {
    Sat,
    Sun,
}

impl WeekendDay {
    /// Classify a weekday, returning None for Monday through Friday.
    pub fn from_weekday(weekday: Weekday) -> Option<Self> {
        match weekday {
            Weekday::Sat => Some(WeekendDay::Sat),
            Weekday::Sun => Some(WeekendDay::Sun),
            _ => None,
        }
    }
}

impl fmt::Display for WeekendDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeekendDay::Sat => write!(f, "Sat"),
            WeekendDay::Sun => write!(f, "Sun"),
        }
    }
}

/// One weekend day worked by one person on one shift.
///
/// Records are ephemeral: built during extraction, consumed by sort/print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date (always a Saturday or Sunday).
    pub date: NaiveDate,
    /// Weekday label matching `date.weekday()`.
    pub day: WeekendDay,
    /// Trimmed SUMMARY text from the event, typically the analyst's name.
    pub name: String,
    /// Which source file the record came from ("AM"/"PM"), not parsed
    /// from the file content itself.
    pub shift: String,
}

impl ShiftRecord {
    /// Report ordering: date first, then shift tag.
    ///
    /// NaiveDate ordering coincides with lexicographic ordering of the
    /// ISO-rendered date, so "AM" rows land above "PM" rows within a day.
    pub fn sort_key(&self) -> (NaiveDate, &str) {
        (self.date, self.shift.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekend_day_rejects_weekdays() {
        assert_eq!(WeekendDay::from_weekday(Weekday::Mon), None);
        assert_eq!(WeekendDay::from_weekday(Weekday::Fri), None);
        assert_eq!(
            WeekendDay::from_weekday(Weekday::Sat),
            Some(WeekendDay::Sat)
        );
        assert_eq!(
            WeekendDay::from_weekday(Weekday::Sun),
            Some(WeekendDay::Sun)
        );
    }

    #[test]
    fn sort_key_orders_am_before_pm_on_same_date() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let am = ShiftRecord {
            date,
            day: WeekendDay::Sat,
            name: "Alice".into(),
            shift: "AM".into(),
        };
        let pm = ShiftRecord {
            date,
            day: WeekendDay::Sat,
            name: "Bob".into(),
            shift: "PM".into(),
        };
        assert!(am.sort_key() < pm.sort_key());
    }
}
