//! Report pipeline.
//!
//! Loaded seasons are fanned out to a bounded pool of blocking workers. Each
//! worker pulls players off a shared queue and fills its own partition; the
//! partitions are merged once every worker has finished.

use std::collections::{BTreeSet, VecDeque};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::calculate::{CareerTable, GameWalker, Metric, StreakClassifier, Tally};
use crate::config::AnalysisConfig;
use crate::models::{PlayerCareerStats, PlayerKey, PlayerPointsStats, Season};
use crate::storage::ReportOutput;

/// Errors that can occur while running a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    #[error("No seasons to analyze")]
    NoSeasons,
}

/// What a run covered.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub metric: Metric,
    pub seasons: usize,
    pub games: usize,
    pub events: usize,
    pub players: usize,
    pub rows: usize,
    pub workers: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Run one report over fully loaded seasons.
pub async fn run_report(
    seasons: Vec<Season>,
    analysis: &AnalysisConfig,
    metric: Metric,
) -> Result<(ReportOutput, RunSummary), ReportError> {
    if seasons.is_empty() {
        return Err(ReportError::NoSeasons);
    }

    let started_at = Utc::now();
    let seasons: Arc<[Season]> = seasons.into();
    let walker = GameWalker::new(
        StreakClassifier::new(analysis.hot_window_seconds),
        analysis.player_match,
    );

    let players: BTreeSet<PlayerKey> = seasons
        .iter()
        .flat_map(|s| s.players.iter().cloned())
        .collect();
    let player_count = players.len();
    let workers = analysis.workers.clamp(1, player_count.max(1));

    info!(
        "Running {} report for {} players across {} seasons with {} workers",
        metric,
        player_count,
        seasons.len(),
        workers
    );

    let output = match metric {
        Metric::HotCold => {
            let table: CareerTable<PlayerCareerStats> =
                collect(seasons.clone(), walker, players, workers).await?;
            ReportOutput::HotCold(table.rows().into_iter().map(|s| s.to_row()).collect())
        }
        Metric::Points => {
            let table: CareerTable<PlayerPointsStats> =
                collect(seasons.clone(), walker, players, workers).await?;
            ReportOutput::Points(table.rows().into_iter().map(|s| s.to_row()).collect())
        }
    };

    let summary = RunSummary {
        metric,
        seasons: seasons.len(),
        games: seasons.iter().map(|s| s.games.len()).sum(),
        events: seasons.iter().map(Season::event_count).sum(),
        players: player_count,
        rows: output.len(),
        workers,
        started_at,
        finished_at: Utc::now(),
    };

    Ok((output, summary))
}

/// Fan players out to `workers` blocking tasks and reduce their partitions.
async fn collect<T: Tally>(
    seasons: Arc<[Season]>,
    walker: GameWalker,
    players: BTreeSet<PlayerKey>,
    workers: usize,
) -> Result<CareerTable<T>, ReportError> {
    let queue = Arc::new(Mutex::new(players.into_iter().collect::<VecDeque<_>>()));
    let mut tasks = JoinSet::new();

    for worker in 0..workers {
        let queue = queue.clone();
        let seasons = seasons.clone();
        tasks.spawn_blocking(move || {
            let mut partition: CareerTable<T> = CareerTable::new();
            while let Some(player) = next_player(&queue) {
                debug!("Worker {} collecting stats for {}", worker, player);
                for season in seasons.iter().filter(|s| s.has_player(&player)) {
                    partition.collect_season(&walker, season, &player);
                }
            }
            partition
        });
    }

    let mut table = CareerTable::new();
    while let Some(partition) = tasks.join_next().await {
        table.merge(partition?);
    }

    Ok(table)
}

fn next_player(queue: &Mutex<VecDeque<PlayerKey>>) -> Option<PlayerKey> {
    match queue.lock() {
        Ok(mut q) => q.pop_front(),
        Err(poisoned) => poisoned.into_inner().pop_front(),
    }
}
