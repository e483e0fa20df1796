//! Habit domain model.
//!
//! A [`Habit`] carries its schedule, its sparse completion [`History`] and
//! the streak counters and badges derived from that history. The derived
//! fields are only ever written through [`Habit::apply_streaks`] and
//! [`Habit::award_badges`].

mod day;
mod history;
mod schedule;

pub use day::CalendarDay;
pub use history::{DayStatus, History};
pub use schedule::{TargetDay, TargetDays};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::streak::StreakSummary;

/// Input for creating a habit.
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub name: String,
    pub target_days: TargetDays,
    pub start_date: CalendarDay,
}

impl NewHabit {
    /// Validate raw user input.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for a blank name, an unknown or empty
    /// target-day list, or a malformed start date.
    pub fn parse<S: AsRef<str>>(
        name: &str,
        target_days: &[S],
        start_date: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            target_days: TargetDays::parse(target_days)?,
            start_date: CalendarDay::parse(start_date)?,
        })
    }
}

/// A tracked habit, in its persisted shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub target_days: TargetDays,
    pub start_date: CalendarDay,
    #[serde(default)]
    pub history: History,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Create a fresh habit with empty history and zero streaks.
    pub fn new(owner_id: impl Into<String>, new: NewHabit) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            name: new.name,
            target_days: new.target_days,
            start_date: new.start_date,
            history: History::new(),
            current_streak: 0,
            longest_streak: 0,
            badges: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }

    pub fn status_on(&self, day: CalendarDay) -> Option<DayStatus> {
        self.history.get(day)
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|b| b == id)
    }

    pub fn apply_streaks(&mut self, summary: StreakSummary) {
        self.current_streak = summary.current_streak;
        self.longest_streak = summary.longest_streak;
    }

    /// Append newly earned badge ids, skipping any already held.
    pub fn award_badges(&mut self, ids: &[String]) {
        for id in ids {
            if !self.has_badge(id) {
                self.badges.push(id.clone());
            }
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
