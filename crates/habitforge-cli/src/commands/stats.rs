use clap::Args;
use habitforge_core::stats::{activity_by_weekday, heatmap, HabitSummary};
use serde::Serialize;

use super::{print_json, Context};

#[derive(Args)]
pub struct StatsArgs {
    /// Limit to one habit
    pub id: Option<String>,
}

#[derive(Args)]
pub struct HeatmapArgs {
    /// Habit ID
    pub id: String,
    /// Number of trailing days (default from config)
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsReport {
    habits: Vec<HabitSummary>,
    activity_by_weekday: Vec<habitforge_core::stats::WeekdayActivity>,
}

pub fn run_stats(args: StatsArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = ctx.tracker()?;
    let habits = match args.id {
        Some(id) => vec![tracker.get_habit(&ctx.owner, &id)?],
        None => tracker.list_habits(&ctx.owner)?,
    };
    let report = StatsReport {
        habits: habits
            .iter()
            .map(|h| HabitSummary::new(h, tracker.catalog()))
            .collect(),
        activity_by_weekday: activity_by_weekday(&habits),
    };
    print_json(&report)
}

pub fn run_heatmap(args: HeatmapArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let habit = ctx.tracker()?.get_habit(&ctx.owner, &args.id)?;
    let window = args.days.unwrap_or(ctx.config.heatmap_days);
    print_json(&heatmap(&habit, ctx.today, window))
}
