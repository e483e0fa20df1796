//! Optimistic local edits reconciled against the authoritative habit.
//!
//! A front end applies a mark locally for immediate feedback, then replaces
//! its state wholesale with the habit returned by the tracker once the write
//! completes. Only one pending edit is held; a newer local edit supersedes
//! it.

use crate::habit::{CalendarDay, DayStatus, Habit};
use crate::streak::compute_streaks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMark {
    pub date: CalendarDay,
    pub status: Option<DayStatus>,
}

/// Authoritative habit plus an optional not-yet-confirmed local edit.
#[derive(Debug, Clone)]
pub struct OptimisticHabit {
    authoritative: Habit,
    view: Habit,
    pending: Option<PendingMark>,
}

impl OptimisticHabit {
    pub fn new(authoritative: Habit) -> Self {
        Self {
            view: authoritative.clone(),
            authoritative,
            pending: None,
        }
    }

    /// What the user should currently see.
    pub fn view(&self) -> &Habit {
        &self.view
    }

    pub fn authoritative(&self) -> &Habit {
        &self.authoritative
    }

    pub fn pending(&self) -> Option<PendingMark> {
        self.pending
    }

    /// Apply a mark locally on top of the authoritative state and recompute
    /// streaks for display. Badges are left to the authoritative side.
    pub fn apply_local(
        &mut self,
        date: CalendarDay,
        status: Option<DayStatus>,
        today: CalendarDay,
    ) -> &Habit {
        let mut view = self.authoritative.clone();
        view.history.set(date, status);
        let summary = compute_streaks(&view.history, &view.target_days, today, view.longest_streak);
        view.apply_streaks(summary);
        self.view = view;
        self.pending = Some(PendingMark { date, status });
        &self.view
    }

    /// Replace all local state with the server's result.
    pub fn reconcile(&mut self, authoritative: Habit) -> &Habit {
        self.view = authoritative.clone();
        self.authoritative = authoritative;
        self.pending = None;
        &self.view
    }

    /// Drop the pending edit, e.g. after the write failed.
    pub fn rollback(&mut self) -> &Habit {
        self.view = self.authoritative.clone();
        self.pending = None;
        &self.view
    }
}
