//! Milestone badges.
//!
//! A badge unlocks once a habit's current streak reaches its
//! `required_streak`. The catalog is a small ordered list; evaluation only
//! reports badges that are newly eligible.

mod catalog;
mod evaluator;

pub use catalog::BadgeCatalog;
pub use evaluator::evaluate_new_badges;

use serde::{Deserialize, Serialize};

/// Presentational tier of a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Master,
}

/// A badge definition. Only `id` and `required_streak` affect evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub required_streak: u32,
    #[serde(default)]
    pub category: BadgeCategory,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#4F46E5".into()
}

impl Badge {
    pub fn new(id: impl Into<String>, name: impl Into<String>, required_streak: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            required_streak,
            category: BadgeCategory::default(),
            icon: String::new(),
            description: String::new(),
            color: default_color(),
        }
    }

    pub fn is_unlocked_by(&self, streak: u32) -> bool {
        self.required_streak <= streak
    }
}
