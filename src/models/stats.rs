//! Per-game and per-career shooting statistics.

use serde::{Deserialize, Serialize};

use super::PlayerKey;
use crate::calculate::{percentage, per_game};

/// Hot/cold three-point counts for one player in one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub hot_makes: u32,
    pub hot_attempts: u32,
    pub cold_makes: u32,
    pub cold_attempts: u32,
}

impl PlayerGameStats {
    pub fn total_attempts(&self) -> u32 {
        self.hot_attempts + self.cold_attempts
    }

    pub fn total_makes(&self) -> u32 {
        self.hot_makes + self.cold_makes
    }
}

/// Derived hot/cold rates, all on the 0-100 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HotColdRates {
    pub total_pct: f64,
    pub cold_pct: f64,
    pub hot_pct: f64,
    pub hot_cold_diff: f64,
    /// Share of all attempts taken while hot
    pub hot_makeup: f64,
}

/// Accumulated hot/cold three-point counts for one player across games and seasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCareerStats {
    pub name: String,
    pub total_makes: u32,
    pub total_attempts: u32,
    pub cold_makes: u32,
    pub cold_attempts: u32,
    pub hot_makes: u32,
    pub hot_attempts: u32,
}

impl PlayerCareerStats {
    pub fn new(name: &PlayerKey) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Fold one game's counts into the running totals.
    pub fn add_game(&mut self, game: &PlayerGameStats) {
        self.total_makes += game.total_makes();
        self.total_attempts += game.total_attempts();
        self.cold_makes += game.cold_makes;
        self.cold_attempts += game.cold_attempts;
        self.hot_makes += game.hot_makes;
        self.hot_attempts += game.hot_attempts;
    }

    /// Fold another partial total for the same player into this one.
    pub fn absorb(&mut self, other: &PlayerCareerStats) {
        self.total_makes += other.total_makes;
        self.total_attempts += other.total_attempts;
        self.cold_makes += other.cold_makes;
        self.cold_attempts += other.cold_attempts;
        self.hot_makes += other.hot_makes;
        self.hot_attempts += other.hot_attempts;
    }

    /// Compute rates from the integer counters.
    pub fn rates(&self) -> HotColdRates {
        if self.total_attempts == 0 {
            return HotColdRates::default();
        }

        let total_pct = percentage(self.total_makes, self.total_attempts);
        let cold_pct = percentage(self.cold_makes, self.cold_attempts);

        if self.hot_attempts == 0 {
            return HotColdRates {
                total_pct,
                cold_pct,
                ..Default::default()
            };
        }

        let hot_pct = percentage(self.hot_makes, self.hot_attempts);
        HotColdRates {
            total_pct,
            cold_pct,
            hot_pct,
            hot_cold_diff: hot_pct - cold_pct,
            hot_makeup: percentage(self.hot_attempts, self.total_attempts),
        }
    }

    /// Flatten counters and rates into one output row.
    pub fn to_row(&self) -> HotColdRow {
        let rates = self.rates();
        HotColdRow {
            name: self.name.clone(),
            total_makes: self.total_makes,
            total_attempts: self.total_attempts,
            total_pct: rates.total_pct,
            cold_makes: self.cold_makes,
            cold_attempts: self.cold_attempts,
            cold_pct: rates.cold_pct,
            hot_makes: self.hot_makes,
            hot_attempts: self.hot_attempts,
            hot_pct: rates.hot_pct,
            hot_cold_diff: rates.hot_cold_diff,
            hot_makeup: rates.hot_makeup,
        }
    }
}

/// One line of the hot/cold report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotColdRow {
    pub name: String,
    pub total_makes: u32,
    pub total_attempts: u32,
    pub total_pct: f64,
    pub cold_makes: u32,
    pub cold_attempts: u32,
    pub cold_pct: f64,
    pub hot_makes: u32,
    pub hot_attempts: u32,
    pub hot_pct: f64,
    pub hot_cold_diff: f64,
    pub hot_makeup: f64,
}

impl HotColdRow {
    pub const HEADER: [&'static str; 12] = [
        "Name",
        "Total 3P Made",
        "Total 3P Att",
        "Total 3P%",
        "Cold 3P Made",
        "Cold 3P Att",
        "Cold 3P%",
        "Hot 3P Made",
        "Hot 3P Att",
        "Hot 3P%",
        "Hot/Cold Diff",
        "Hot Shot Makeup",
    ];

    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.total_makes.to_string(),
            self.total_attempts.to_string(),
            self.total_pct.to_string(),
            self.cold_makes.to_string(),
            self.cold_attempts.to_string(),
            self.cold_pct.to_string(),
            self.hot_makes.to_string(),
            self.hot_attempts.to_string(),
            self.hot_pct.to_string(),
            self.hot_cold_diff.to_string(),
            self.hot_makeup.to_string(),
        ]
    }
}

/// Points scored by one player in one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGamePoints {
    /// Whether any event in the game was attributed to the player
    pub appeared: bool,
    pub points: u32,
}

/// Accumulated scoring for one player across games and seasons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPointsStats {
    pub name: String,
    pub games: u32,
    pub points: u32,
}

impl PlayerPointsStats {
    pub fn new(name: &PlayerKey) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn add_game(&mut self, game: &PlayerGamePoints) {
        if game.appeared {
            self.games += 1;
            self.points += game.points;
        }
    }

    pub fn absorb(&mut self, other: &PlayerPointsStats) {
        self.games += other.games;
        self.points += other.points;
    }

    pub fn points_per_game(&self) -> f64 {
        per_game(self.points, self.games)
    }

    pub fn to_row(&self) -> PointsRow {
        PointsRow {
            name: self.name.clone(),
            games: self.games,
            points: self.points,
            points_per_game: self.points_per_game(),
        }
    }
}

/// One line of the points report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsRow {
    pub name: String,
    pub games: u32,
    pub points: u32,
    pub points_per_game: f64,
}

impl PointsRow {
    pub const HEADER: [&'static str; 4] = ["Name", "Games", "Points", "PPG"];

    pub fn to_record(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.games.to_string(),
            self.points.to_string(),
            self.points_per_game.to_string(),
        ]
    }
}
