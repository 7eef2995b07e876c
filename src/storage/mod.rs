//! Filesystem data layout.
//!
//! Each season lives in its own directory under the data dir:
//! - `players.dat`: one roster key per line
//! - `*.csv`: one play-by-play table per game
//!
//! Reports are written to a single output file.

mod report;
mod season;

pub use report::*;
pub use season::*;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Roster file name inside a season directory.
pub const PLAYERS_FILE: &str = "players.dat";

/// Glob matching game files inside a season directory.
pub const GAME_GLOB: &str = "*.csv";

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl StorageError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &Path, source: csv::Error) -> Self {
        StorageError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn season_dir(&self, season_id: &str) -> PathBuf {
        self.data_dir.join(season_id)
    }

    pub fn players_file(&self, season_id: &str) -> PathBuf {
        self.season_dir(season_id).join(PLAYERS_FILE)
    }

    /// Glob pattern for a season's game files.
    pub fn game_pattern(&self, season_id: &str) -> Result<String, StorageError> {
        let pattern = self.season_dir(season_id).join(GAME_GLOB);
        pattern
            .to_str()
            .map(str::to_string)
            .ok_or_else(|| StorageError::InvalidPath(pattern.display().to_string()))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
