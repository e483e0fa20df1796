use clap::{Parser, Subcommand};
use habitforge_core::{CalendarDay, Config};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "habitforge", version, about = "HabitForge CLI")]
struct Cli {
    /// Act as this owner instead of the configured one
    #[arg(long, global = true)]
    owner: Option<String>,
    /// Treat this day (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Mark a day as completed or missed, or clear it
    Mark(commands::mark::MarkArgs),
    /// Badge catalog
    Badge {
        #[command(subcommand)]
        action: commands::badge::BadgeAction,
    },
    /// Streak and completion statistics
    Stats(commands::stats::StatsArgs),
    /// Recent-days heatmap for a habit
    Heatmap(commands::stats::HeatmapArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("HABITFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Config commands load and save the file themselves
    let command = match cli.command {
        Commands::Config { action } => return commands::config::run(action),
        other => other,
    };

    let config = Config::load_or_default();
    let today = match cli.today.as_deref() {
        Some(s) => CalendarDay::parse(s)?,
        None => CalendarDay::today(),
    };
    let ctx = commands::Context {
        owner: cli.owner.unwrap_or_else(|| config.owner_id.clone()),
        today,
        config,
    };
    tracing::debug!(owner = %ctx.owner, today = %ctx.today, "resolved context");

    match command {
        Commands::Habit { action } => commands::habit::run(action, &ctx),
        Commands::Mark(args) => commands::mark::run(args, &ctx),
        Commands::Badge { action } => commands::badge::run(action, &ctx),
        Commands::Stats(args) => commands::stats::run_stats(args, &ctx),
        Commands::Heatmap(args) => commands::stats::run_heatmap(args, &ctx),
        Commands::Config { action } => commands::config::run(action),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
