use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hot_hand::calculate::Metric;
use hot_hand::config::{AppConfig, OutputFormat};
use hot_hand::ingest::run_report;
use hot_hand::models::MatchMode;
use hot_hand::parse_season_ids;
use hot_hand::storage::{list_seasons, load_seasons, ReportWriter, StorageConfig};

#[derive(Parser)]
#[command(name = "hot-hand")]
#[command(about = "Hot/cold three-point shooting analysis over NBA play-by-play logs")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Three-point percentage while hot vs. cold
    HotCold(ReportArgs),

    /// Games, points and points per game
    Points(ReportArgs),

    /// List season directories under the data dir
    Seasons,
}

#[derive(Args)]
struct ReportArgs {
    /// Season ids (comma separated, e.g. "2015_16,2016_17")
    #[arg(short, long)]
    seasons: String,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Concurrent player workers
    #[arg(long)]
    workers: Option<usize>,

    /// Hot window in seconds after a made three
    #[arg(long)]
    hot_window: Option<i64>,

    /// Player matching: "substring" or "token"
    #[arg(long)]
    match_mode: Option<MatchMode>,

    /// Output format: "csv" or "json"
    #[arg(long)]
    format: Option<OutputFormat>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting hot-hand v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());

    match cli.command {
        Commands::HotCold(args) => run(config, storage, args, Metric::HotCold).await?,
        Commands::Points(args) => run(config, storage, args, Metric::Points).await?,
        Commands::Seasons => {
            let seasons = list_seasons(&storage).with_context(|| {
                format!("Failed to list seasons in {}", storage.data_dir.display())
            })?;
            if seasons.is_empty() {
                println!("No seasons found in {}", storage.data_dir.display());
            }
            for season in seasons {
                println!("{}", season);
            }
        }
    }

    Ok(())
}

async fn run(
    mut config: AppConfig,
    storage: StorageConfig,
    args: ReportArgs,
    metric: Metric,
) -> Result<()> {
    if let Some(workers) = args.workers {
        config.analysis.workers = workers;
    }
    if let Some(window) = args.hot_window {
        config.analysis.hot_window_seconds = window;
    }
    if let Some(mode) = args.match_mode {
        config.analysis.player_match = mode;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    config.validate()?;

    let season_ids = parse_season_ids(&args.seasons);
    if season_ids.is_empty() {
        bail!("No season ids given (expected e.g. --seasons 2016_17)");
    }

    // Everything is loaded before the output file is touched.
    let seasons = load_seasons(&storage, &season_ids).context("Failed to load seasons")?;

    let (report, summary) = run_report(seasons, &config.analysis, metric).await?;

    let writer = ReportWriter::new(args.output, config.output.format);
    writer
        .write(&report)
        .with_context(|| format!("Failed to write report to {}", writer.path().display()))?;

    tracing::info!(
        "{} report: {} rows from {} games ({} events) in {} ms",
        summary.metric,
        summary.rows,
        summary.games,
        summary.events,
        (summary.finished_at - summary.started_at).num_milliseconds()
    );

    Ok(())
}
