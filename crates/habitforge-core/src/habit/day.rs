//! Calendar-day values in `YYYY-MM-DD` form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A plain calendar day with no time or timezone component.
///
/// Only the exact `YYYY-MM-DD` shape is accepted; `2025-4-9` or
/// `2025-04-29T00:00:00Z` are rejected rather than normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDay(NaiveDate);

impl CalendarDay {
    /// Parse a `YYYY-MM-DD` string.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidDateFormat`] if the string is not
    /// exactly ten characters of the form `dddd-dd-dd` or names a day that
    /// does not exist (e.g. `2025-02-30`).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let bytes = s.as_bytes();
        let shaped = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shaped {
            return Err(ValidationError::InvalidDateFormat(s.to_string()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat(s.to_string()))
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// The day before, saturating at the earliest representable date.
    pub fn pred(&self) -> Self {
        Self(self.0.pred_opt().unwrap_or(self.0))
    }

    /// The day after, saturating at the latest representable date.
    pub fn succ(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: CalendarDay) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Shift by a signed number of days, saturating on overflow.
    pub fn offset(&self, days: i64) -> Self {
        self.0
            .checked_add_signed(Duration::days(days))
            .map(Self)
            .unwrap_or(*self)
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDay> for String {
    fn from(day: CalendarDay) -> Self {
        day.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_form() {
        let day = CalendarDay::parse("2025-04-29").unwrap();
        assert_eq!(day.to_string(), "2025-04-29");
        assert_eq!(day.weekday(), Weekday::Tue);
    }

    #[test]
    fn rejects_non_canonical_shapes() {
        for bad in [
            "2025-4-29",
            "2025/04/29",
            "20250429",
            "2025-04-29T00:00:00Z",
            " 2025-04-29",
            "",
            "abcd-ef-gh",
        ] {
            assert_eq!(
                CalendarDay::parse(bad),
                Err(ValidationError::InvalidDateFormat(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(CalendarDay::parse("2025-02-30").is_err());
        assert!(CalendarDay::parse("2025-13-01").is_err());
        assert!(CalendarDay::parse("2024-02-29").is_ok());
    }

    #[test]
    fn pred_and_succ_cross_month_boundaries() {
        let day = CalendarDay::parse("2025-03-01").unwrap();
        assert_eq!(day.pred().to_string(), "2025-02-28");
        assert_eq!(day.pred().succ(), day);
    }

    #[test]
    fn days_until_is_signed() {
        let a = CalendarDay::parse("2025-04-25").unwrap();
        let b = CalendarDay::parse("2025-04-27").unwrap();
        assert_eq!(a.days_until(b), 2);
        assert_eq!(b.days_until(a), -2);
        assert_eq!(a.offset(2), b);
    }

    #[test]
    fn serde_uses_plain_string() {
        let day = CalendarDay::parse("2025-04-29").unwrap();
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2025-04-29\"");
        let back: CalendarDay = serde_json::from_str("\"2025-04-29\"").unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<CalendarDay>("\"29-04-2025\"").is_err());
    }
}
