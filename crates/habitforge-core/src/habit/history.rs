//! Per-habit completion history.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::day::CalendarDay;
use crate::error::ValidationError;

/// Explicit mark recorded for a day. Unmarked days have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Completed,
    Missed,
}

impl DayStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Missed => "missed",
        }
    }

    /// Parse the status argument of a status update.
    ///
    /// `completed` and `missed` set a mark; `clear`, `none` and `null`
    /// request removal of the day's entry.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidStatus`] for anything else.
    pub fn parse_update(s: &str) -> Result<Option<Self>, ValidationError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" | "none" | "null" => Ok(None),
            _ => s.parse().map(Some),
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(DayStatus::Completed),
            "missed" => Ok(DayStatus::Missed),
            _ => Err(ValidationError::InvalidStatus(s.to_string())),
        }
    }
}

/// Mapping from calendar day to mark.
///
/// Serialized as a JSON object keyed by `YYYY-MM-DD`. Incoming `null`
/// values are treated as absent and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History(BTreeMap<CalendarDay, DayStatus>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from string keys, as handed over by a caller that
    /// has not validated its input.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidDateFormat`] for the first key that
    /// is not a `YYYY-MM-DD` day, or [`ValidationError::InvalidStatus`] for
    /// an unknown status value.
    pub fn from_raw<K, V>(
        entries: impl IntoIterator<Item = (K, Option<V>)>,
    ) -> Result<Self, ValidationError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let day = CalendarDay::parse(key.as_ref())?;
            if let Some(value) = value {
                map.insert(day, value.as_ref().parse()?);
            }
        }
        Ok(Self(map))
    }

    pub fn get(&self, day: CalendarDay) -> Option<DayStatus> {
        self.0.get(&day).copied()
    }

    pub fn is_completed(&self, day: CalendarDay) -> bool {
        self.get(day) == Some(DayStatus::Completed)
    }

    /// Set or clear the mark for a day. Returns the previous mark.
    pub fn set(&mut self, day: CalendarDay, status: Option<DayStatus>) -> Option<DayStatus> {
        match status {
            Some(status) => self.0.insert(day, status),
            None => self.0.remove(&day),
        }
    }

    /// Completed days in chronological order.
    pub fn completed_days(&self) -> impl Iterator<Item = CalendarDay> + '_ {
        self.0
            .iter()
            .filter(|(_, status)| **status == DayStatus::Completed)
            .map(|(day, _)| *day)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CalendarDay, DayStatus)> + '_ {
        self.0.iter().map(|(day, status)| (*day, *status))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CalendarDay, DayStatus)> for History {
    fn from_iter<I: IntoIterator<Item = (CalendarDay, DayStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<CalendarDay, Option<DayStatus>>::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(day, status)| status.map(|s| (day, s)))
                .collect(),
        ))
    }
}
