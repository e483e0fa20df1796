pub mod badge;
pub mod config;
pub mod habit;
pub mod mark;
pub mod stats;

use habitforge_core::{CalendarDay, Config, HabitDb, HabitTracker};

/// Per-invocation settings shared by the commands.
pub struct Context {
    pub owner: String,
    pub today: CalendarDay,
    pub config: Config,
}

impl Context {
    pub fn tracker(&self) -> Result<HabitTracker<HabitDb>, Box<dyn std::error::Error>> {
        Ok(HabitTracker::with_catalog(HabitDb::open()?, self.config.catalog()))
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
