use clap::Subcommand;
use serde::Serialize;

use super::{print_json, Context};

#[derive(Subcommand)]
pub enum BadgeAction {
    /// List the badge catalog
    List,
    /// Show badges earned by a habit
    Earned {
        /// Habit ID
        id: String,
    },
    /// List every badge a streak of the given length qualifies for, highest first
    Eligible {
        /// Streak length in days
        streak: u32,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EarnedBadge<'a> {
    id: &'a str,
    name: Option<&'a str>,
    icon: Option<&'a str>,
}

pub fn run(action: BadgeAction, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ctx.config.catalog();
    match action {
        BadgeAction::List => print_json(&catalog)?,
        BadgeAction::Eligible { streak } => print_json(&catalog.eligible(streak))?,
        BadgeAction::Earned { id } => {
            let habit = ctx.tracker()?.get_habit(&ctx.owner, &id)?;
            let earned: Vec<_> = habit
                .badges
                .iter()
                .map(|id| {
                    let badge = catalog.get(id);
                    EarnedBadge {
                        id,
                        name: badge.map(|b| b.name.as_str()),
                        icon: badge.map(|b| b.icon.as_str()),
                    }
                })
                .collect();
            print_json(&earned)?;
        }
    }
    Ok(())
}
