use clap::Args;
use habitforge_core::{CalendarDay, DayStatus};

use super::{print_json, Context};

#[derive(Args)]
pub struct MarkArgs {
    /// Habit ID
    pub id: String,
    /// Status: completed, missed or clear
    pub status: String,
    /// Day to mark (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub date: Option<String>,
}

pub fn run(args: MarkArgs, ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    // Validate before touching storage
    let status = DayStatus::parse_update(&args.status)?;
    let date = match args.date.as_deref() {
        Some(d) => CalendarDay::parse(d)?,
        None => ctx.today,
    };

    let mut tracker = ctx.tracker()?;
    let update = tracker.update_status(&ctx.owner, &args.id, date, status, ctx.today)?;
    for id in &update.new_badges {
        if let Some(badge) = tracker.catalog().get(id) {
            eprintln!("Badge unlocked: {} {}", badge.icon, badge.name);
        }
    }
    print_json(&update)
}
