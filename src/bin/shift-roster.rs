use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use shift_roster::config::AppConfig;
use shift_roster::exchange;
use shift_roster::export::render_text;
use shift_roster::models::{parse_names, BreakWindow, ScheduleResult, ShiftPeriod};
use shift_roster::validation::{check_references, combined_notice, Selection};

#[derive(Parser)]
#[command(name = "shift-roster")]
#[command(version)]
#[command(about = "Plan staggered staff breaks and inspect roster files", long_about = None)]
struct Cli {
    /// JSON config file (defaults are used when omitted)
    #[arg(long, global = true, env = "SHIFT_ROSTER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split names into two break groups for one shift
    Plan {
        /// Comma- or newline-separated names
        #[arg(short, long)]
        names: String,

        /// morning, afternoon or full-day
        #[arg(short, long, default_value = "morning")]
        period: ShiftPeriod,

        /// Hours after shift start when the first break begins
        #[arg(short, long, default_value = "")]
        offset: String,

        /// Break length in minutes
        #[arg(short, long, default_value = "")]
        duration: String,
    },
    /// Print a schedule file as tables
    Render {
        /// Schedule JSON file
        schedule: PathBuf,
    },
    /// Report schedule entries that reference missing taxonomy items
    Check {
        /// Schedule JSON file
        schedule: PathBuf,

        /// Taxonomy JSON file
        #[arg(short, long)]
        taxonomy: PathBuf,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn plan_groups(
    config: &AppConfig,
    names: &str,
    period: ShiftPeriod,
    offset: &str,
    duration: &str,
) -> ScheduleResult {
    let names = parse_names(names);
    let window = BreakWindow::from_fields(offset, duration);
    if window.is_none() && !(offset.trim().is_empty() && duration.trim().is_empty()) {
        warn!(offset, duration, "break fields incomplete or not numeric; no break applied");
    }
    config
        .planner()
        .assign(names.as_slice(), period.start_hour(), window)
}

fn plan(
    config: &AppConfig,
    names: &str,
    period: ShiftPeriod,
    offset: &str,
    duration: &str,
) -> Result<()> {
    let result = plan_groups(config, names, period, offset, duration);

    println!("{} ({})", period.label(), period.time_range());
    for (i, group) in result.groups().iter().enumerate() {
        println!(
            "  Group {}: {} | Break: {}",
            i + 1,
            group.names.join(", "),
            group.break_label()
        );
    }
    Ok(())
}

fn render(path: &Path) -> Result<()> {
    let entries = exchange::read_schedule(path)
        .with_context(|| format!("reading schedule {}", path.display()))?;
    debug!(entries = entries.len(), "schedule loaded");
    print!("{}", render_text(&entries));
    Ok(())
}

fn check(schedule: &Path, taxonomy: &Path) -> Result<()> {
    let entries = exchange::read_schedule(schedule)
        .with_context(|| format!("reading schedule {}", schedule.display()))?;
    let taxonomy = exchange::read_taxonomy(taxonomy)
        .with_context(|| format!("reading taxonomy {}", taxonomy.display()))?;
    let catalog = shift_roster::models::RoleCatalog::Tiered(taxonomy);

    let total = entries.len();
    let mut stale = 0;
    for (idx, entry) in entries.iter().enumerate() {
        if let Err(errors) = check_references(&Selection::from(entry), &catalog) {
            stale += 1;
            println!("#{} - Role: {}", total - idx, entry.role);
            println!("{}", combined_notice(&errors));
        }
    }

    if stale > 0 {
        bail!("{stale} of {total} entries reference missing taxonomy items");
    }
    info!(entries = total, "all references resolved");
    println!("All {total} entries match the taxonomy");
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Plan {
            names,
            period,
            offset,
            duration,
        } => plan(&config, &names, period, &offset, &duration),
        Commands::Render { schedule } => render(&schedule),
        Commands::Check { schedule, taxonomy } => check(&schedule, &taxonomy),
    }
}
