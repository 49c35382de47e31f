use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use urbanheat::districts::loader::load_builtin_districts;
use urbanheat::input::{InputError, load_district_table};
use urbanheat::logging;
use urbanheat::model::district::DistrictRecord;
use urbanheat::model::thresholds::ScoringThresholds;
use urbanheat::pipeline::alerts::{AlertOptions, build_alert_feed};
use urbanheat::pipeline::heatmap::{DAYS_AVAILABLE, DEFAULT_SAMPLES, day_label, heat_layer_for_day};
use urbanheat::pipeline::mitigation::{Strategy, simulate_mitigation};
use urbanheat::pipeline::report::{ReportInput, ReportMode, write_heatmap_tsv, write_reports};
use urbanheat::pipeline::scoring::score_districts;
use urbanheat::report::json::render_json;

const DEFAULT_SEED: u64 = 20_240_601;

/// District heat-vulnerability scoring and mock urban heat-risk layers
#[derive(Parser, Debug)]
#[command(name = "urbanheat", version, about, propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score district vulnerability and write TSV/JSON/text reports
    Score(ScoreArgs),
    /// Generate the mock land-surface-temperature layer for one day
    Heatmap(HeatmapArgs),
    /// Print the alert feed and suggested route for a district
    Alerts(AlertArgs),
    /// Print a before/after mitigation series for a strategy and district
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Output directory
    #[arg(long)]
    out: PathBuf,
    /// District table (TSV, optionally .gz); built-in districts when omitted
    #[arg(long)]
    districts: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportMode::District)]
    mode: ReportMode,
}

#[derive(Args, Debug)]
struct HeatmapArgs {
    #[arg(long)]
    out: PathBuf,
    /// Days before today (0 = today)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..DAYS_AVAILABLE as i64))]
    day: u8,
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    samples: usize,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

#[derive(Args, Debug)]
struct AlertArgs {
    #[arg(long)]
    district: String,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(long)]
    hide_route: bool,
    #[arg(long)]
    hide_alerts: bool,
}

#[derive(Args, Debug)]
struct PlanArgs {
    #[arg(long, value_enum)]
    strategy: Strategy,
    #[arg(long)]
    district: String,
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Score(args) => run_score(&args),
        Command::Heatmap(args) => {
            let samples = heat_layer_for_day(args.day, args.samples, args.seed);
            let path = args.out.join("heatmap.tsv");
            let day = day_label(args.day);
            write_heatmap_tsv(&samples, &day, &path)?;
            tracing::info!(
                day = %day,
                samples = samples.len(),
                path = %path.display(),
                "wrote heat layer"
            );
            Ok(())
        }
        Command::Alerts(args) => {
            let opts = AlertOptions {
                show_route: !args.hide_route,
                show_alerts: !args.hide_alerts,
                seed: args.seed,
            };
            let feed = build_alert_feed(&args.district, &opts)?;
            print!("{}", render_json(&feed)?);
            Ok(())
        }
        Command::Plan(args) => {
            let series = simulate_mitigation(args.strategy, &args.district, args.seed);
            print!("{}", render_json(&series)?);
            Ok(())
        }
    }
}

fn run_score(args: &ScoreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (records, source) = load_records(args.districts.as_deref())?;
    let thresholds = ScoringThresholds::default_v1();
    let scored = score_districts(&records, &thresholds)?;

    let input = ReportInput {
        scored: &scored,
        thresholds: &thresholds,
        source,
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out, args.mode)?;
    Ok(())
}

fn load_records(path: Option<&Path>) -> Result<(Vec<DistrictRecord>, String), InputError> {
    match path {
        Some(path) => Ok((load_district_table(path)?, path.display().to_string())),
        None => {
            tracing::info!("no district table given; using built-in districts");
            Ok((load_builtin_districts(), "builtin".to_string()))
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
