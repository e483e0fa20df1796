//! SQLite-based habit storage.
//!
//! One row per habit. Scalar fields are columns; the schedule, history and
//! badge list are stored as JSON text so a row maps one-to-one onto the
//! persisted habit document.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use super::{data_dir, migrations};
use crate::error::{CoreError, DatabaseError, Result};
use crate::habit::{CalendarDay, Habit, History, TargetDays};
use crate::tracker::HabitStore;

const HABIT_COLUMNS: &str = "id, owner_id, name, target_days, start_date, history,
     current_streak, longest_streak, badges, created_at, updated_at";

/// Raw column values of a habit row, decoded in a second step so JSON
/// errors can be reported against the habit id.
struct HabitRow {
    id: String,
    owner_id: String,
    name: String,
    target_days: String,
    start_date: String,
    history: String,
    current_streak: u32,
    longest_streak: u32,
    badges: String,
    created_at: String,
    updated_at: String,
}

impl HabitRow {
    fn from_row(row: &rusqlite::Row) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            name: row.get(2)?,
            target_days: row.get(3)?,
            start_date: row.get(4)?,
            history: row.get(5)?,
            current_streak: row.get(6)?,
            longest_streak: row.get(7)?,
            badges: row.get(8)?,
            created_at: row.get(9)?,
            updated_at: row.get(10)?,
        })
    }

    fn into_habit(self) -> Result<Habit> {
        let id = self.id;
        let corrupt = |message: String| {
            CoreError::Database(DatabaseError::CorruptRecord {
                id: id.clone(),
                message,
            })
        };

        let target_days: TargetDays = serde_json::from_str(&self.target_days)
            .map_err(|e| corrupt(format!("target_days: {e}")))?;
        let history: History =
            serde_json::from_str(&self.history).map_err(|e| corrupt(format!("history: {e}")))?;
        let badges: Vec<String> =
            serde_json::from_str(&self.badges).map_err(|e| corrupt(format!("badges: {e}")))?;
        let start_date = CalendarDay::parse(&self.start_date)
            .map_err(|e| corrupt(format!("start_date: {e}")))?;
        let created_at = parse_timestamp(&self.created_at).map_err(|e| corrupt(format!("created_at: {e}")))?;
        let updated_at = parse_timestamp(&self.updated_at).map_err(|e| corrupt(format!("updated_at: {e}")))?;

        Ok(Habit {
            id,
            owner_id: self.owner_id,
            name: self.name,
            target_days,
            start_date,
            history,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            badges,
            created_at,
            updated_at,
        })
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

/// SQLite database for habit storage.
pub struct HabitDb {
    conn: Connection,
}

impl HabitDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `<data_dir>/habitforge.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("habitforge.db");
        Self::open_at(&path)
    }

    /// Open (or create) a database file at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        migrations::migrate(&conn)
            .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    fn write_params(habit: &Habit) -> Result<[String; 5]> {
        Ok([
            serde_json::to_string(&habit.target_days)?,
            serde_json::to_string(&habit.history)?,
            serde_json::to_string(&habit.badges)?,
            habit.created_at.to_rfc3339(),
            habit.updated_at.to_rfc3339(),
        ])
    }

    /// Number of stored habits across all owners.
    pub fn count(&self) -> Result<u64> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM habits", [], |row| row.get(0))?;
        Ok(n as u64)
    }
}

impl HabitStore for HabitDb {
    fn insert(&mut self, habit: &Habit) -> Result<()> {
        let [target_days, history, badges, created_at, updated_at] = Self::write_params(habit)?;
        self.conn.execute(
            "INSERT INTO habits (id, owner_id, name, target_days, start_date, history,
                                 current_streak, longest_streak, badges, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            params![
                habit.id,
                habit.owner_id,
                habit.name,
                target_days,
                habit.start_date.to_string(),
                history,
                habit.current_streak,
                habit.longest_streak,
                badges,
                created_at,
                updated_at,
            ],
        )?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Habit>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1"),
                params![id],
                HabitRow::from_row,
            )
            .optional()?;
        row.map(HabitRow::into_habit).transpose()
    }

    fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Habit>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {HABIT_COLUMNS} FROM habits WHERE owner_id = ?1 ORDER BY created_at, id"
        ))?;
        let rows = stmt.query_map(params![owner_id], HabitRow::from_row)?;

        let mut habits = Vec::new();
        for row in rows {
            habits.push(row?.into_habit()?);
        }
        Ok(habits)
    }

    fn save(&mut self, habit: &Habit) -> Result<()> {
        let [target_days, history, badges, _, updated_at] = Self::write_params(habit)?;
        let changed = self.conn.execute(
            "UPDATE habits
             SET name = ?2, target_days = ?3, start_date = ?4, history = ?5,
                 current_streak = ?6, longest_streak = ?7, badges = ?8, updated_at = ?9
             WHERE id = ?1",
            params![
                habit.id,
                habit.name,
                target_days,
                habit.start_date.to_string(),
                history,
                habit.current_streak,
                habit.longest_streak,
                badges,
                updated_at,
            ],
        )?;
        if changed == 0 {
            return Err(CoreError::NotFound {
                id: habit.id.clone(),
            });
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM habits WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{DayStatus, NewHabit};

    fn sample(owner: &str, name: &str) -> Habit {
        Habit::new(owner, NewHabit::parse(name, &["Monday", "friday"], "2025-04-01").unwrap())
    }

    #[test]
    fn insert_and_get_round_trips_document() {
        let mut db = HabitDb::open_memory().unwrap();
        let mut habit = sample("u1", "Lift");
        habit
            .history
            .set(CalendarDay::parse("2025-04-04").unwrap(), Some(DayStatus::Completed));
        habit.badges.push("getting-started".into());
        db.insert(&habit).unwrap();

        let loaded = db.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.history, habit.history);
        assert_eq!(loaded.target_days, habit.target_days);
        assert_eq!(loaded.badges, habit.badges);
        assert_eq!(loaded.start_date, habit.start_date);
    }

    #[test]
    fn get_missing_is_none() {
        let db = HabitDb::open_memory().unwrap();
        assert!(db.get("missing").unwrap().is_none());
    }

    #[test]
    fn list_by_owner_filters() {
        let mut db = HabitDb::open_memory().unwrap();
        db.insert(&sample("u1", "A")).unwrap();
        db.insert(&sample("u1", "B")).unwrap();
        db.insert(&sample("u2", "C")).unwrap();
        assert_eq!(db.list_by_owner("u1").unwrap().len(), 2);
        assert_eq!(db.list_by_owner("u2").unwrap().len(), 1);
        assert_eq!(db.count().unwrap(), 3);
    }

    #[test]
    fn save_updates_derived_fields() {
        let mut db = HabitDb::open_memory().unwrap();
        let mut habit = sample("u1", "A");
        db.insert(&habit).unwrap();

        habit.current_streak = 4;
        habit.longest_streak = 6;
        db.save(&habit).unwrap();

        let loaded = db.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.current_streak, 4);
        assert_eq!(loaded.longest_streak, 6);
    }

    #[test]
    fn save_unknown_is_not_found() {
        let mut db = HabitDb::open_memory().unwrap();
        let err = db.save(&sample("u1", "Ghost")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn delete_reports_removal() {
        let mut db = HabitDb::open_memory().unwrap();
        let habit = sample("u1", "A");
        db.insert(&habit).unwrap();
        assert!(db.delete(&habit.id).unwrap());
        assert!(!db.delete(&habit.id).unwrap());
    }

    #[test]
    fn corrupt_history_is_reported() {
        let mut db = HabitDb::open_memory().unwrap();
        let habit = sample("u1", "A");
        db.insert(&habit).unwrap();
        db.conn()
            .execute(
                "UPDATE habits SET history = '{\"not-a-date\":\"completed\"}' WHERE id = ?1",
                params![habit.id],
            )
            .unwrap();
        let err = db.get(&habit.id).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Database(DatabaseError::CorruptRecord { .. })
        ));
    }
}
