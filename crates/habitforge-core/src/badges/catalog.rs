//! Ordered badge catalog.

use serde::{Deserialize, Serialize};

use super::{Badge, BadgeCategory};
use crate::error::ValidationError;

/// Badges ordered by ascending `required_streak`.
///
/// Badges sharing a threshold keep their definition order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Badge>", into = "Vec<Badge>")]
pub struct BadgeCatalog {
    badges: Vec<Badge>,
}

impl BadgeCatalog {
    /// Build a catalog from definitions in any order.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidBadge`] for a blank or duplicate id
    /// or a zero threshold.
    pub fn new(mut badges: Vec<Badge>) -> Result<Self, ValidationError> {
        for (i, badge) in badges.iter().enumerate() {
            if badge.id.trim().is_empty() {
                return Err(ValidationError::InvalidBadge {
                    id: badge.id.clone(),
                    message: "id must not be blank".into(),
                });
            }
            if badge.required_streak == 0 {
                return Err(ValidationError::InvalidBadge {
                    id: badge.id.clone(),
                    message: "required streak must be positive".into(),
                });
            }
            if badges[..i].iter().any(|b| b.id == badge.id) {
                return Err(ValidationError::InvalidBadge {
                    id: badge.id.clone(),
                    message: "duplicate id".into(),
                });
            }
        }
        // sort_by_key is stable
        badges.sort_by_key(|b| b.required_streak);
        Ok(Self { badges })
    }

    pub fn get(&self, id: &str) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == id)
    }

    /// Every badge unlocked by `streak`, highest threshold first.
    pub fn eligible(&self, streak: u32) -> Vec<&Badge> {
        self.badges
            .iter()
            .rev()
            .filter(|b| b.is_unlocked_by(streak))
            .collect()
    }

    /// The next badge still out of reach at `streak`, if any.
    pub fn next_after(&self, streak: u32) -> Option<&Badge> {
        self.badges.iter().find(|b| !b.is_unlocked_by(streak))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }
}

impl Default for BadgeCatalog {
    fn default() -> Self {
        let badge = |id: &str, name: &str, streak, category, icon: &str, description: &str, color: &str| Badge {
            id: id.into(),
            name: name.into(),
            required_streak: streak,
            category,
            icon: icon.into(),
            description: description.into(),
            color: color.into(),
        };
        Self {
            badges: vec![
                badge(
                    "getting-started",
                    "Getting Started",
                    3,
                    BadgeCategory::Beginner,
                    "🥉",
                    "First successful streak!",
                    "#6EE7B7",
                ),
                badge(
                    "weekly-warrior",
                    "Weekly Warrior",
                    7,
                    BadgeCategory::Beginner,
                    "🥈",
                    "A full week of consistency!",
                    "#93C5FD",
                ),
                badge(
                    "fortnight-focus",
                    "Fortnight Focus",
                    14,
                    BadgeCategory::Intermediate,
                    "🥇",
                    "Two strong weeks!",
                    "#FCD34D",
                ),
                badge(
                    "monthly-master",
                    "Monthly Master",
                    30,
                    BadgeCategory::Advanced,
                    "🏆",
                    "A habit formed for real!",
                    "#F472B6",
                ),
            ],
        }
    }
}

impl TryFrom<Vec<Badge>> for BadgeCatalog {
    type Error = ValidationError;

    fn try_from(value: Vec<Badge>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BadgeCatalog> for Vec<Badge> {
    fn from(catalog: BadgeCatalog) -> Self {
        catalog.badges
    }
}
