//! Streak engine.
//!
//! Streaks are always recomputed from the full history; nothing is updated
//! incrementally. Two numbers come out:
//!
//! - **longest**: the longest run of calendar-consecutive completed days
//!   anywhere in the history, floored by the previously recorded longest
//!   streak so it never decreases.
//! - **current**: the run ending today. Today must be completed. Walking
//!   backward, completed days extend the run, an explicit `missed` mark
//!   always ends it, and an unmarked day ends it only when the schedule
//!   expected the habit that day.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::habit::{CalendarDay, DayStatus, History, TargetDays};

/// Upper bound on the current streak: the walk visits at most this many
/// days, today included.
pub const MAX_LOOKBACK_DAYS: u32 = 365;

/// Result of a streak computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// Compute current and longest streaks.
///
/// `previous_longest` is the longest streak recorded before this call; the
/// returned `longest_streak` is never below it, nor below `current_streak`.
pub fn compute_streaks(
    history: &History,
    target_days: &TargetDays,
    today: CalendarDay,
    previous_longest: u32,
) -> StreakSummary {
    if history.is_empty() {
        return StreakSummary {
            current_streak: 0,
            longest_streak: previous_longest,
        };
    }

    let longest_run = longest_run(history);
    let current_streak = current_run(history, target_days, today);
    let longest_streak = longest_run.max(previous_longest).max(current_streak);

    debug!(
        current_streak,
        longest_run, previous_longest, longest_streak, %today, "recomputed streaks"
    );

    StreakSummary {
        current_streak,
        longest_streak,
    }
}

/// String-keyed entry point for callers holding unvalidated input.
///
/// # Errors
/// Returns [`ValidationError::InvalidDateFormat`] if `today` or any history
/// key is not `YYYY-MM-DD`, [`ValidationError::InvalidStatus`] for an unknown
/// status value, and [`ValidationError::InvalidTargetDay`] for an unknown
/// schedule entry. Nothing is computed on error.
pub fn compute_streaks_raw<K, V, D>(
    history: impl IntoIterator<Item = (K, Option<V>)>,
    target_days: &[D],
    today: &str,
    previous_longest: u32,
) -> Result<StreakSummary, ValidationError>
where
    K: AsRef<str>,
    V: AsRef<str>,
    D: AsRef<str>,
{
    let today = CalendarDay::parse(today)?;
    let history = History::from_raw(history)?;
    let target_days = TargetDays::parse(target_days)?;
    Ok(compute_streaks(&history, &target_days, today, previous_longest))
}

/// Longest run of calendar-consecutive completed days, ignoring schedule.
pub fn longest_run(history: &History) -> u32 {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut previous: Option<CalendarDay> = None;

    for day in history.completed_days() {
        run = match previous {
            Some(prev) if prev.days_until(day) == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

/// Length of the streak ending on `today`.
pub fn current_run(history: &History, target_days: &TargetDays, today: CalendarDay) -> u32 {
    if !history.is_completed(today) {
        return 0;
    }

    let mut streak = 1u32;
    let mut day = today;
    for _ in 1..MAX_LOOKBACK_DAYS {
        day = day.pred();
        match history.get(day) {
            Some(DayStatus::Completed) => streak += 1,
            Some(DayStatus::Missed) => break,
            None if target_days.is_target(day) => break,
            None => {}
        }
    }
    streak
}
