//! Play-by-play shot event model.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Column holding the countdown clock ("MM:SS").
pub const CLOCK_IDX: usize = 7;

/// Column holding the 1-indexed period number.
pub const PERIOD_IDX: usize = 8;

/// Column holding the player name.
pub const PLAYER_IDX: usize = 13;

/// Column holding the home team action text.
pub const HOME_DESC_IDX: usize = 5;

/// Column holding the away team action text.
pub const AWAY_DESC_IDX: usize = 32;

/// Length of one period in seconds (12-minute quarter).
pub const PERIOD_LENGTH_SECS: i64 = 12 * 60;

/// Reasons a play-by-play row cannot become a [`ShotEvent`].
///
/// Header rows land here too, which is how they get filtered out of game data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRow {
    #[error("Row has {0} fields, expected at least {}", AWAY_DESC_IDX + 1)]
    TooFewFields(usize),

    #[error("Malformed clock: '{0}'")]
    Clock(String),

    #[error("Malformed minutes: '{0}'")]
    Minutes(String),

    #[error("Malformed seconds: '{0}'")]
    Seconds(String),

    #[error("Malformed period: '{0}'")]
    Period(String),
}

/// One row of in-game action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotEvent {
    /// Lower-cased player field of the row
    pub player: String,

    /// Lower-cased home + away action text
    pub description: String,

    /// Seconds since the start of the game
    pub elapsed_seconds: i64,

    /// 1-indexed period
    pub period: u32,

    /// Clock minutes remaining in the period
    pub minutes_left: u32,

    /// Clock seconds remaining in the period
    pub seconds_left: u32,
}

impl ShotEvent {
    /// Build an event from a raw CSV record.
    ///
    /// Fields that are not valid UTF-8 (Latin-1 names in older scrapes) are
    /// decoded lossily rather than rejected.
    pub fn from_record(record: &csv::ByteRecord) -> Result<Self, MalformedRow> {
        let decoded: Vec<Cow<'_, str>> = record.iter().map(String::from_utf8_lossy).collect();
        let fields: Vec<&str> = decoded.iter().map(AsRef::as_ref).collect();
        Self::from_fields(&fields)
    }

    /// Build an event from positional row fields.
    pub fn from_fields(fields: &[&str]) -> Result<Self, MalformedRow> {
        if fields.len() <= AWAY_DESC_IDX {
            return Err(MalformedRow::TooFewFields(fields.len()));
        }

        let clock = fields[CLOCK_IDX];
        let (minutes, seconds) = match clock.split(':').collect::<Vec<_>>().as_slice() {
            [m, s] => (*m, *s),
            _ => return Err(MalformedRow::Clock(clock.to_string())),
        };

        let minutes_left: u32 = minutes
            .trim()
            .parse()
            .map_err(|_| MalformedRow::Minutes(minutes.to_string()))?;
        let seconds_left: u32 = seconds
            .trim()
            .parse()
            .map_err(|_| MalformedRow::Seconds(seconds.to_string()))?;

        let period_field = fields[PERIOD_IDX];
        let period: u32 = match period_field.trim().parse() {
            Ok(p) if p > 0 => p,
            _ => return Err(MalformedRow::Period(period_field.to_string())),
        };

        let description = format!(
            "{} {}",
            fields[HOME_DESC_IDX].to_lowercase(),
            fields[AWAY_DESC_IDX].to_lowercase()
        )
        .trim()
        .to_string();

        Ok(Self {
            player: fields[PLAYER_IDX].to_lowercase(),
            description,
            elapsed_seconds: elapsed_seconds(period, minutes_left, seconds_left),
            period,
            minutes_left,
            seconds_left,
        })
    }

    fn mentions(&self, needle: &str) -> bool {
        self.description.contains(needle)
    }

    /// Field goal attempt (made or missed, free throws excluded).
    pub fn is_field_goal_attempt(&self) -> bool {
        !self.mentions("free throw") && (self.mentions("pts") || self.mentions("miss"))
    }

    pub fn is_field_goal_make(&self) -> bool {
        !self.mentions("free throw") && self.mentions("pts")
    }

    /// Three-point attempt, made or missed.
    pub fn is_three_attempt(&self) -> bool {
        !self.mentions("free throw") && self.mentions("3pt")
    }

    pub fn is_three_make(&self) -> bool {
        self.is_three_attempt() && !self.mentions("miss")
    }

    pub fn is_free_throw_attempt(&self) -> bool {
        self.mentions("free throw")
    }

    pub fn is_free_throw_make(&self) -> bool {
        self.mentions("free throw") && self.mentions("pts")
    }

    /// Points this event put on the board for its player.
    pub fn points_scored(&self) -> u32 {
        if self.is_three_make() {
            3
        } else if self.is_field_goal_make() {
            2
        } else if self.is_free_throw_make() {
            1
        } else {
            0
        }
    }
}

impl std::fmt::Display for ShotEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Q{} {}:{:02} | {}",
            self.period, self.minutes_left, self.seconds_left, self.description
        )
    }
}

/// Convert a period and countdown clock into seconds since tip-off.
pub fn elapsed_seconds(period: u32, minutes_left: u32, seconds_left: u32) -> i64 {
    let period_base = (i64::from(period) - 1) * PERIOD_LENGTH_SECS;
    let remaining = i64::from(minutes_left) * 60 + i64::from(seconds_left);
    period_base + PERIOD_LENGTH_SECS - remaining
}
