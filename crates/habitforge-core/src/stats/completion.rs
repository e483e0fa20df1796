//! Completion rates and weekday activity.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::badges::BadgeCatalog;
use crate::habit::{DayStatus, Habit, History, TargetDay};

/// Percentage of recorded days marked completed (0.0 to 100.0).
///
/// Unmarked days are not recorded and do not count against the rate.
pub fn completion_rate(history: &History) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let completed = history.completed_days().count();
    completed as f64 / history.len() as f64 * 100.0
}

/// Completed marks on one weekday across a set of habits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayActivity {
    pub weekday: TargetDay,
    pub completed: u32,
}

/// Completed marks per weekday, Sunday first.
pub fn activity_by_weekday(habits: &[Habit]) -> Vec<WeekdayActivity> {
    const ORDER: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    let mut counts = [0u32; 7];
    for habit in habits {
        for (day, status) in habit.history.iter() {
            if status == DayStatus::Completed {
                counts[day.weekday().num_days_from_sunday() as usize] += 1;
            }
        }
    }

    ORDER
        .iter()
        .zip(counts)
        .map(|(weekday, completed)| WeekdayActivity {
            weekday: TargetDay::from_weekday(*weekday),
            completed,
        })
        .collect()
}

/// Per-habit numbers for the stats view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    pub id: String,
    pub name: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completed_days: usize,
    pub missed_days: usize,
    pub completion_rate: f64,
    pub badges: Vec<String>,
    /// Next badge to aim for and how many more days it needs
    pub next_badge: Option<String>,
    pub days_to_next_badge: Option<u32>,
}

impl HabitSummary {
    pub fn new(habit: &Habit, catalog: &BadgeCatalog) -> Self {
        let completed_days = habit.history.completed_days().count();
        let next = catalog.next_after(habit.current_streak);
        Self {
            id: habit.id.clone(),
            name: habit.name.clone(),
            current_streak: habit.current_streak,
            longest_streak: habit.longest_streak,
            completed_days,
            missed_days: habit.history.len() - completed_days,
            completion_rate: completion_rate(&habit.history),
            badges: habit.badges.clone(),
            next_badge: next.map(|b| b.id.clone()),
            days_to_next_badge: next.map(|b| b.required_streak - habit.current_streak),
        }
    }
}
