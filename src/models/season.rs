//! Season and game containers produced by the storage layer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{PlayerKey, ShotEvent};

/// One game's events, in the order the producer wrote them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    /// File the game was read from
    pub source: PathBuf,

    pub events: Vec<ShotEvent>,

    /// Rows dropped because they could not be normalized
    pub skipped_rows: usize,
}

impl Game {
    pub fn new(source: PathBuf, events: Vec<ShotEvent>) -> Self {
        Self {
            source,
            events,
            skipped_rows: 0,
        }
    }
}

/// A season's roster and games.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Season {
    /// Season id, e.g. "2016_17"
    pub id: String,

    /// Roster keys to evaluate for this season
    pub players: Vec<PlayerKey>,

    pub games: Vec<Game>,
}

impl Season {
    pub fn new(id: impl Into<String>, players: Vec<PlayerKey>, games: Vec<Game>) -> Self {
        Self {
            id: id.into(),
            players,
            games,
        }
    }

    /// Whether this season's roster lists the player.
    pub fn has_player(&self, player: &PlayerKey) -> bool {
        self.players.contains(player)
    }

    pub fn event_count(&self) -> usize {
        self.games.iter().map(|g| g.events.len()).sum()
    }
}
