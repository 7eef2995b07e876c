//! Per-game walks over one player's events.

use super::StreakClassifier;
use crate::models::{
    Game, MatchMode, PlayerCareerStats, PlayerGamePoints, PlayerGameStats, PlayerKey,
    PlayerPointsStats, ShotEvent,
};

/// Which report a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Hot/cold three-point rates
    HotCold,
    /// Games, points and points per game
    Points,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::HotCold => write!(f, "hot-cold"),
            Metric::Points => write!(f, "points"),
        }
    }
}

/// Player-level statistics that can be built up one game at a time and
/// merged across partial results.
pub trait Tally: Clone + Send + 'static {
    /// What a single game contributes.
    type PerGame;

    fn named(player: &PlayerKey) -> Self;

    fn walk(walker: &GameWalker, player: &PlayerKey, game: &Game) -> Self::PerGame;

    fn add_game(&mut self, game: &Self::PerGame);

    fn absorb(&mut self, other: &Self);
}

/// Attributes events to a player and runs the per-game computation.
#[derive(Debug, Clone, Copy)]
pub struct GameWalker {
    classifier: StreakClassifier,
    match_mode: MatchMode,
}

impl GameWalker {
    pub fn new(classifier: StreakClassifier, match_mode: MatchMode) -> Self {
        Self {
            classifier,
            match_mode,
        }
    }

    /// The player's events from one game, in game order.
    pub fn player_events<'a>(
        &'a self,
        player: &'a PlayerKey,
        game: &'a Game,
    ) -> impl Iterator<Item = &'a ShotEvent> + 'a {
        game.events
            .iter()
            .filter(move |e| player.matches(&e.player, self.match_mode))
    }

    pub fn hot_cold(&self, player: &PlayerKey, game: &Game) -> PlayerGameStats {
        self.classifier
            .classify_game(self.player_events(player, game))
    }

    pub fn points(&self, player: &PlayerKey, game: &Game) -> PlayerGamePoints {
        self.player_events(player, game)
            .fold(PlayerGamePoints::default(), |acc, event| PlayerGamePoints {
                appeared: true,
                points: acc.points + event.points_scored(),
            })
    }
}

impl Default for GameWalker {
    fn default() -> Self {
        Self::new(StreakClassifier::default(), MatchMode::default())
    }
}

impl Tally for PlayerCareerStats {
    type PerGame = PlayerGameStats;

    fn named(player: &PlayerKey) -> Self {
        PlayerCareerStats::new(player)
    }

    fn walk(walker: &GameWalker, player: &PlayerKey, game: &Game) -> PlayerGameStats {
        walker.hot_cold(player, game)
    }

    fn add_game(&mut self, game: &PlayerGameStats) {
        PlayerCareerStats::add_game(self, game)
    }

    fn absorb(&mut self, other: &Self) {
        PlayerCareerStats::absorb(self, other)
    }
}

impl Tally for PlayerPointsStats {
    type PerGame = PlayerGamePoints;

    fn named(player: &PlayerKey) -> Self {
        PlayerPointsStats::new(player)
    }

    fn walk(walker: &GameWalker, player: &PlayerKey, game: &Game) -> PlayerGamePoints {
        walker.points(player, game)
    }

    fn add_game(&mut self, game: &PlayerGamePoints) {
        PlayerPointsStats::add_game(self, game)
    }

    fn absorb(&mut self, other: &Self) {
        PlayerPointsStats::absorb(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::streak::shot;
    use std::path::PathBuf;

    fn game() -> Game {
        let mut teammate = shot(105, "Thompson 3PT Jump Shot (3 PTS)");
        teammate.player = "klay thompson".to_string();

        Game::new(
            PathBuf::from("0021600001.csv"),
            vec![
                shot(100, "Curry 3PT Jump Shot (3 PTS)"),
                teammate,
                shot(150, "MISS Curry 3PT Jump Shot"),
                shot(200, "Curry Layup (2 PTS)"),
                shot(260, "Curry Free Throw 1 of 2 (1 PTS)"),
            ],
        )
    }

    #[test]
    fn test_hot_cold_walk_filters_player() {
        let walker = GameWalker::default();
        let stats = walker.hot_cold(&PlayerKey::from("curry"), &game());
        assert_eq!(stats.cold_attempts, 1);
        assert_eq!(stats.cold_makes, 1);
        assert_eq!(stats.hot_attempts, 1);
        assert_eq!(stats.hot_makes, 0);
    }

    #[test]
    fn test_teammate_streak_is_independent() {
        let walker = GameWalker::default();
        let stats = walker.hot_cold(&PlayerKey::from("thompson"), &game());
        assert_eq!(stats.cold_attempts, 1);
        assert_eq!(stats.hot_attempts, 0);
    }

    #[test]
    fn test_points_walk() {
        let walker = GameWalker::default();
        let points = walker.points(&PlayerKey::from("curry"), &game());
        assert!(points.appeared);
        assert_eq!(points.points, 6);
    }

    #[test]
    fn test_points_walk_absent_player() {
        let walker = GameWalker::default();
        let points = walker.points(&PlayerKey::from("durant"), &game());
        assert!(!points.appeared);
        assert_eq!(points.points, 0);
    }

    #[test]
    fn test_token_mode_rejects_partial_names() {
        let walker = GameWalker::new(StreakClassifier::default(), MatchMode::Token);
        let stats = walker.hot_cold(&PlayerKey::from("curr"), &game());
        assert_eq!(stats.total_attempts(), 0);
    }

    #[test]
    fn test_metric_display() {
        assert_eq!(Metric::HotCold.to_string(), "hot-cold");
        assert_eq!(Metric::Points.to_string(), "points");
    }
}
