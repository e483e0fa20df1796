//! Recent-days heatmap for a single habit.

use serde::{Deserialize, Serialize};

use crate::habit::{CalendarDay, DayStatus, Habit};

/// Number of trailing days shown by default.
pub const DEFAULT_HEATMAP_DAYS: u32 = 35;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: CalendarDay,
    pub status: Option<DayStatus>,
    pub target_day: bool,
    pub today: bool,
}

/// Cells from the habit's start date through `today`, keeping only the last
/// `window` days. Empty if the habit starts after `today`.
pub fn heatmap(habit: &Habit, today: CalendarDay, window: u32) -> Vec<HeatmapCell> {
    if habit.start_date > today || window == 0 {
        return Vec::new();
    }
    let first = if i64::from(window) > habit.start_date.days_until(today) {
        habit.start_date
    } else {
        today.offset(1 - i64::from(window))
    };

    let mut cells = Vec::new();
    let mut day = first;
    loop {
        cells.push(HeatmapCell {
            date: day,
            status: habit.status_on(day),
            target_day: habit.target_days.is_target(day),
            today: day == today,
        });
        if day >= today {
            break;
        }
        day = day.succ();
    }
    cells
}
