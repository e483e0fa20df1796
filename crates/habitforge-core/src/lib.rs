//! # HabitForge Core Library
//!
//! Business logic for tracking recurring habits, their consecutive-day
//! streaks and the milestone badges those streaks unlock. The CLI binary is
//! a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Streak Engine**: pure recomputation of current and longest streaks
//!   from a habit's full history
//! - **Badges**: ordered milestone catalog and new-badge evaluation
//! - **Tracker**: the status-update operation tying engine, badges and
//!   storage together
//! - **Storage**: SQLite habit storage and TOML configuration
//!
//! ## Key Components
//!
//! - [`compute_streaks`]: streak engine entry point
//! - [`evaluate_new_badges`]: badge evaluator
//! - [`HabitTracker`]: status updates and habit lifecycle
//! - [`HabitDb`]: SQLite-backed [`HabitStore`]

pub mod badges;
pub mod error;
pub mod habit;
pub mod reconcile;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod tracker;

pub use badges::{evaluate_new_badges, Badge, BadgeCatalog, BadgeCategory};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use habit::{CalendarDay, DayStatus, Habit, History, NewHabit, TargetDay, TargetDays};
pub use reconcile::OptimisticHabit;
pub use storage::{Config, HabitDb};
pub use streak::{compute_streaks, compute_streaks_raw, StreakSummary, MAX_LOOKBACK_DAYS};
pub use tracker::{HabitStore, HabitTracker, MemoryStore, StatusUpdate};
