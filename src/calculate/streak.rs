//! Hot/cold classification of three-point attempts within a single game.
//!
//! A player is "hot" for a fixed window after a made three. Each attempt is
//! judged against the time of the player's last make in the game; misses
//! never move that cursor, and any make (hot or cold) restarts the window.

use crate::models::{PlayerGameStats, ShotEvent};

/// Default hot window after a made three, in seconds.
pub const DEFAULT_HOT_WINDOW_SECS: i64 = 2 * 60;

/// Streak state of an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streak {
    Hot,
    Cold,
}

/// Outcome of classifying one three-point attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub streak: Streak,
    pub made: bool,
}

/// Per-game cursor over one player's attempts.
///
/// A last-make time of 0 counts as unset, so a make stamped at tip-off does
/// not open a window.
#[derive(Debug, Clone)]
pub struct StreakState {
    hot_window: i64,
    last_make: Option<i64>,
    stats: PlayerGameStats,
}

impl StreakState {
    pub fn new(hot_window: i64) -> Self {
        Self {
            hot_window,
            last_make: None,
            stats: PlayerGameStats::default(),
        }
    }

    /// Time of the last make that can open a hot window.
    pub fn last_make(&self) -> Option<i64> {
        self.last_make
    }

    /// Feed the next event in chronological order.
    ///
    /// Returns `None` for anything that is not a three-point attempt.
    pub fn observe(&mut self, event: &ShotEvent) -> Option<Classification> {
        if !event.is_three_attempt() {
            return None;
        }

        let made = event.is_three_make();
        let streak = match self.last_make {
            Some(last) if event.elapsed_seconds <= last.saturating_add(self.hot_window) => {
                Streak::Hot
            }
            _ => Streak::Cold,
        };

        match streak {
            Streak::Hot => {
                self.stats.hot_attempts += 1;
                if made {
                    self.stats.hot_makes += 1;
                }
            }
            Streak::Cold => {
                self.stats.cold_attempts += 1;
                if made {
                    self.stats.cold_makes += 1;
                }
            }
        }

        if made {
            self.last_make = (event.elapsed_seconds != 0).then_some(event.elapsed_seconds);
        }

        Some(Classification { streak, made })
    }

    /// Counts accumulated so far.
    pub fn stats(&self) -> PlayerGameStats {
        self.stats
    }
}

/// Classifies a game's worth of one player's events.
#[derive(Debug, Clone, Copy)]
pub struct StreakClassifier {
    hot_window: i64,
}

impl StreakClassifier {
    pub fn new(hot_window: i64) -> Self {
        Self { hot_window }
    }

    pub fn hot_window(&self) -> i64 {
        self.hot_window
    }

    /// Walk one player's events from one game, oldest first.
    pub fn classify_game<'a, I>(&self, events: I) -> PlayerGameStats
    where
        I: IntoIterator<Item = &'a ShotEvent>,
    {
        let mut state = StreakState::new(self.hot_window);
        for event in events {
            state.observe(event);
        }
        state.stats()
    }
}

impl Default for StreakClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_HOT_WINDOW_SECS)
    }
}

#[cfg(test)]
pub(crate) fn shot(elapsed_seconds: i64, description: &str) -> ShotEvent {
    ShotEvent {
        player: "stephen curry".to_string(),
        description: description.to_lowercase(),
        elapsed_seconds,
        period: 1,
        minutes_left: 0,
        seconds_left: 0,
    }
}
