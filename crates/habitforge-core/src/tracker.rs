//! Habit tracker service.
//!
//! [`HabitTracker`] is the collaborator that owns the status-update
//! operation: it applies one day's mark to a habit, recomputes streaks from
//! the full history, evaluates badges, and persists everything as one write.
//! Callers hand in an already-authenticated owner id.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::badges::{evaluate_new_badges, BadgeCatalog};
use crate::error::{CoreError, Result};
use crate::habit::{CalendarDay, DayStatus, Habit, NewHabit, TargetDays};
use crate::streak::compute_streaks;

/// Persistence collaborator for habits.
pub trait HabitStore {
    fn insert(&mut self, habit: &Habit) -> Result<()>;
    fn get(&self, id: &str) -> Result<Option<Habit>>;
    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Habit>>;
    /// Replace the stored habit with `habit` (same id).
    fn save(&mut self, habit: &Habit) -> Result<()>;
    /// Returns whether a habit was removed.
    fn delete(&mut self, id: &str) -> Result<bool>;
}

/// In-process store keyed by habit id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    habits: HashMap<String, Habit>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HabitStore for MemoryStore {
    fn insert(&mut self, habit: &Habit) -> Result<()> {
        self.habits.insert(habit.id.clone(), habit.clone());
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Habit>> {
        Ok(self.habits.get(id).cloned())
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Habit>> {
        let mut habits: Vec<_> = self
            .habits
            .values()
            .filter(|h| h.is_owned_by(owner_id))
            .cloned()
            .collect();
        habits.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(habits)
    }

    fn save(&mut self, habit: &Habit) -> Result<()> {
        if !self.habits.contains_key(&habit.id) {
            return Err(CoreError::NotFound {
                id: habit.id.clone(),
            });
        }
        self.habits.insert(habit.id.clone(), habit.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        Ok(self.habits.remove(id).is_some())
    }
}

/// Outcome of a status update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub habit: Habit,
    pub new_badges: Vec<String>,
}

/// Habit operations over a [`HabitStore`].
pub struct HabitTracker<S> {
    store: S,
    catalog: BadgeCatalog,
}

impl<S: HabitStore> HabitTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_catalog(store, BadgeCatalog::default())
    }

    pub fn with_catalog(store: S, catalog: BadgeCatalog) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &BadgeCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn create_habit(&mut self, owner_id: &str, new: NewHabit) -> Result<Habit> {
        let habit = Habit::new(owner_id, new);
        self.store.insert(&habit)?;
        info!(habit_id = %habit.id, owner_id, name = %habit.name, "created habit");
        Ok(habit)
    }

    /// Fetch a habit owned by `owner_id`.
    ///
    /// # Errors
    /// [`CoreError::NotFound`] if no such habit exists, [`CoreError::Forbidden`]
    /// if it belongs to someone else.
    pub fn get_habit(&self, owner_id: &str, id: &str) -> Result<Habit> {
        let habit = self
            .store
            .get(id)?
            .ok_or_else(|| CoreError::NotFound { id: id.to_string() })?;
        if !habit.is_owned_by(owner_id) {
            return Err(CoreError::Forbidden { id: id.to_string() });
        }
        Ok(habit)
    }

    pub fn list_habits(&self, owner_id: &str) -> Result<Vec<Habit>> {
        self.store.list_by_owner(owner_id)
    }

    /// Habits whose schedule includes `day`.
    pub fn habits_for_day(&self, owner_id: &str, day: CalendarDay) -> Result<Vec<Habit>> {
        let mut habits = self.list_habits(owner_id)?;
        habits.retain(|h| h.target_days.is_target(day));
        Ok(habits)
    }

    /// Delete a habit and its history.
    pub fn delete_habit(&mut self, owner_id: &str, id: &str) -> Result<()> {
        self.get_habit(owner_id, id)?;
        self.store.delete(id)?;
        info!(habit_id = id, owner_id, "deleted habit");
        Ok(())
    }

    pub fn rename_habit(&mut self, owner_id: &str, id: &str, name: &str) -> Result<Habit> {
        let name = name.trim();
        if name.is_empty() {
            return Err(crate::error::ValidationError::EmptyName.into());
        }
        let mut habit = self.get_habit(owner_id, id)?;
        habit.name = name.to_string();
        habit.touch();
        self.store.save(&habit)?;
        Ok(habit)
    }

    /// Change a habit's schedule. Streaks depend on it, so they are
    /// recomputed as of `today`; badges are not re-evaluated.
    pub fn set_target_days(
        &mut self,
        owner_id: &str,
        id: &str,
        target_days: TargetDays,
        today: CalendarDay,
    ) -> Result<Habit> {
        let mut habit = self.get_habit(owner_id, id)?;
        habit.target_days = target_days;
        let summary = compute_streaks(
            &habit.history,
            &habit.target_days,
            today,
            habit.longest_streak,
        );
        habit.apply_streaks(summary);
        habit.touch();
        self.store.save(&habit)?;
        Ok(habit)
    }

    /// Set or clear one day's mark, recompute streaks and badges, and
    /// persist the result as a single write.
    ///
    /// `status` of `None` removes the day's entry. `today` anchors the
    /// current-streak walk.
    pub fn update_status(
        &mut self,
        owner_id: &str,
        id: &str,
        date: CalendarDay,
        status: Option<DayStatus>,
        today: CalendarDay,
    ) -> Result<StatusUpdate> {
        let mut habit = self.get_habit(owner_id, id)?;
        let previous_streak = habit.current_streak;

        habit.history.set(date, status);
        let summary = compute_streaks(
            &habit.history,
            &habit.target_days,
            today,
            habit.longest_streak,
        );
        habit.apply_streaks(summary);

        let new_badges = evaluate_new_badges(habit.current_streak, &habit.badges, &self.catalog);
        habit.award_badges(&new_badges);
        habit.touch();
        self.store.save(&habit)?;

        debug!(
            habit_id = id,
            %date,
            status = status.map(|s| s.as_str()).unwrap_or("clear"),
            previous_streak,
            current_streak = habit.current_streak,
            longest_streak = habit.longest_streak,
            "applied status update"
        );
        if !new_badges.is_empty() {
            info!(habit_id = id, badges = ?new_badges, "unlocked badges");
        }

        Ok(StatusUpdate { habit, new_badges })
    }
}
