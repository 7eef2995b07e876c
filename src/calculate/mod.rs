//! Statistics calculation engine.
//!
//! Turns normalized shot events into per-player statistics:
//! - Hot/cold streak classification of three-point attempts
//! - Per-game walks for each report metric
//! - Cross-game, cross-season aggregation

mod aggregate;
mod streak;
mod walk;

pub use aggregate::*;
pub use streak::*;
pub use walk::*;

/// Made/attempted as a 0-100 percentage, 0 when nothing was attempted.
pub fn percentage(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        (made as f64 / attempted as f64) * 100.0
    }
}

/// Average per game, 0 when no games were played.
pub fn per_game(total: u32, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}
