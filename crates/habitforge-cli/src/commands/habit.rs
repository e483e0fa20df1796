//! Habit management commands for CLI.

use clap::Subcommand;
use habitforge_core::{CalendarDay, NewHabit, TargetDays};

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Create {
        /// Habit name
        name: String,
        /// Comma-separated target days (e.g. "monday,friday" or "daily")
        #[arg(long, default_value = "daily")]
        days: String,
        /// First tracked day (YYYY-MM-DD, default: today)
        #[arg(long)]
        start: Option<String>,
    },
    /// List all habits
    List,
    /// List habits scheduled for today (or --date)
    Today {
        /// Day to check instead of today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show one habit
    Show {
        /// Habit ID
        id: String,
    },
    /// Rename a habit
    Rename {
        /// Habit ID
        id: String,
        /// New name
        name: String,
    },
    /// Change a habit's target days
    Schedule {
        /// Habit ID
        id: String,
        /// Comma-separated target days
        days: String,
    },
    /// Delete a habit and its history
    Delete {
        /// Habit ID
        id: String,
    },
}

fn split_days(days: &str) -> Vec<&str> {
    days.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}

pub fn run(action: HabitAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = ctx.tracker()?;

    match action {
        HabitAction::Create { name, days, start } => {
            let start = start.unwrap_or_else(|| ctx.today.to_string());
            let new = NewHabit::parse(&name, &split_days(&days), &start)?;
            let habit = tracker.create_habit(&ctx.owner, new)?;
            eprintln!("Habit created: {}", habit.id);
            print_json(&habit)?;
        }
        HabitAction::List => {
            print_json(&tracker.list_habits(&ctx.owner)?)?;
        }
        HabitAction::Today { date } => {
            let day = match date {
                Some(d) => CalendarDay::parse(&d)?,
                None => ctx.today,
            };
            print_json(&tracker.habits_for_day(&ctx.owner, day)?)?;
        }
        HabitAction::Show { id } => {
            print_json(&tracker.get_habit(&ctx.owner, &id)?)?;
        }
        HabitAction::Rename { id, name } => {
            print_json(&tracker.rename_habit(&ctx.owner, &id, &name)?)?;
        }
        HabitAction::Schedule { id, days } => {
            let target_days = TargetDays::parse(&split_days(&days))?;
            print_json(&tracker.set_target_days(&ctx.owner, &id, target_days, ctx.today)?)?;
        }
        HabitAction::Delete { id } => {
            tracker.delete_habit(&ctx.owner, &id)?;
            println!("Habit deleted: {id}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_days_trims_and_drops_empty() {
        assert_eq!(split_days("monday, Friday,,"), vec!["monday", "Friday"]);
        assert!(split_days("").is_empty());
    }
}
