//! # Hot Hand
//!
//! Hot/cold three-point shooting analysis over NBA play-by-play logs.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (shot events, roster keys, stats)
//! - **calculate**: Streak classification, per-game walks and aggregation
//! - **storage**: Season directories in, report files out
//! - **ingest**: Concurrent report pipeline over loaded seasons
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod ingest;
pub mod models;
pub mod storage;

pub use models::*;

/// Split a comma-separated season list (e.g., "2015_16,2016_17").
///
/// Surrounding whitespace and empty entries are dropped.
pub fn parse_season_ids(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
