//! Analytics over habit histories
//!
//! Completion rates, weekday activity and the per-habit heatmap shown by
//! the dashboard views.

mod completion;
mod heatmap;

pub use completion::{activity_by_weekday, completion_rate, HabitSummary, WeekdayActivity};
pub use heatmap::{heatmap, HeatmapCell, DEFAULT_HEATMAP_DAYS};
