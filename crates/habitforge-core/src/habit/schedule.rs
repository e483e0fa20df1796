//! Target-day schedules.
//!
//! A habit is scheduled on a set of weekdays or on every day via the
//! `daily` sentinel. Names are matched case-insensitively and always
//! written back in lowercase.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize, Serializer};

use super::day::CalendarDay;
use crate::error::ValidationError;

/// One entry of a habit's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum TargetDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    /// Every day of the week
    Daily,
}

impl TargetDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetDay::Monday => "monday",
            TargetDay::Tuesday => "tuesday",
            TargetDay::Wednesday => "wednesday",
            TargetDay::Thursday => "thursday",
            TargetDay::Friday => "friday",
            TargetDay::Saturday => "saturday",
            TargetDay::Sunday => "sunday",
            TargetDay::Daily => "daily",
        }
    }

    /// Does this entry schedule the given weekday?
    pub fn covers(&self, weekday: Weekday) -> bool {
        match self {
            TargetDay::Daily => true,
            other => *other == Self::from_weekday(weekday),
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => TargetDay::Monday,
            Weekday::Tue => TargetDay::Tuesday,
            Weekday::Wed => TargetDay::Wednesday,
            Weekday::Thu => TargetDay::Thursday,
            Weekday::Fri => TargetDay::Friday,
            Weekday::Sat => TargetDay::Saturday,
            Weekday::Sun => TargetDay::Sunday,
        }
    }
}

impl fmt::Display for TargetDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" => Ok(TargetDay::Monday),
            "tuesday" => Ok(TargetDay::Tuesday),
            "wednesday" => Ok(TargetDay::Wednesday),
            "thursday" => Ok(TargetDay::Thursday),
            "friday" => Ok(TargetDay::Friday),
            "saturday" => Ok(TargetDay::Saturday),
            "sunday" => Ok(TargetDay::Sunday),
            "daily" => Ok(TargetDay::Daily),
            _ => Err(ValidationError::InvalidTargetDay(s.to_string())),
        }
    }
}

impl TryFrom<String> for TargetDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for TargetDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Normalized, non-empty set of target days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TargetDay>")]
pub struct TargetDays(BTreeSet<TargetDay>);

impl TargetDays {
    /// Build a schedule from already-parsed entries.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyTargetDays`] if no entry is given.
    pub fn new(days: impl IntoIterator<Item = TargetDay>) -> Result<Self, ValidationError> {
        let set: BTreeSet<_> = days.into_iter().collect();
        if set.is_empty() {
            return Err(ValidationError::EmptyTargetDays);
        }
        Ok(Self(set))
    }

    /// Parse a list of day names, case-insensitively.
    ///
    /// # Errors
    /// Returns the first unknown name as [`ValidationError::InvalidTargetDay`],
    /// or [`ValidationError::EmptyTargetDays`] for an empty list.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, ValidationError> {
        let days = names
            .iter()
            .map(|n| n.as_ref().parse::<TargetDay>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(days)
    }

    /// The every-day schedule.
    pub fn daily() -> Self {
        Self(BTreeSet::from([TargetDay::Daily]))
    }

    /// Is the given calendar day a scheduled day?
    pub fn is_target(&self, day: CalendarDay) -> bool {
        let weekday = day.weekday();
        self.0.iter().any(|d| d.covers(weekday))
    }

    pub fn is_daily(&self) -> bool {
        self.0.contains(&TargetDay::Daily)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetDay> {
        self.0.iter()
    }
}

impl Default for TargetDays {
    fn default() -> Self {
        Self::daily()
    }
}

impl TryFrom<Vec<TargetDay>> for TargetDays {
    type Error = ValidationError;

    fn try_from(value: Vec<TargetDay>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for TargetDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.0.iter().map(TargetDay::as_str).collect();
        f.write_str(&names.join(","))
    }
}
