//! Core data models for play-by-play analysis.

mod event;
mod player;
mod season;
mod stats;

pub use event::*;
pub use player::*;
pub use season::*;
pub use stats::*;
