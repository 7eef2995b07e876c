//! Cross-game and cross-season aggregation keyed by player.

use std::collections::HashMap;

use super::{GameWalker, Tally};
use crate::models::{PlayerKey, Season};

/// Player → accumulated statistics.
///
/// Entries are created on first sight of a player and only ever summed into.
#[derive(Debug, Clone)]
pub struct CareerTable<T> {
    entries: HashMap<PlayerKey, T>,
}

impl<T: Tally> CareerTable<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Make sure the player has a row, even if no game ever mentions them.
    pub fn ensure(&mut self, player: &PlayerKey) -> &mut T {
        self.entries
            .entry(player.clone())
            .or_insert_with(|| T::named(player))
    }

    /// Fold one game's contribution into the player's totals.
    pub fn record(&mut self, player: &PlayerKey, game: &T::PerGame) {
        self.ensure(player).add_game(game);
    }

    /// Walk every game of a season for one player.
    pub fn collect_season(&mut self, walker: &GameWalker, season: &Season, player: &PlayerKey) {
        let entry = self.ensure(player);
        for game in &season.games {
            entry.add_game(&T::walk(walker, player, game));
        }
    }

    /// Merge another partition into this one.
    pub fn merge(&mut self, other: CareerTable<T>) {
        for (player, stats) in other.entries {
            match self.entries.get_mut(&player) {
                Some(existing) => existing.absorb(&stats),
                None => {
                    self.entries.insert(player, stats);
                }
            }
        }
    }

    pub fn get(&self, player: &PlayerKey) -> Option<&T> {
        self.entries.get(player)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by player key.
    pub fn rows(&self) -> Vec<&T> {
        let mut keys: Vec<&PlayerKey> = self.entries.keys().collect();
        keys.sort();
        keys.into_iter().filter_map(|k| self.entries.get(k)).collect()
    }
}

impl<T: Tally> Default for CareerTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Game, PlayerCareerStats, PlayerGameStats, PlayerPointsStats};
    use pretty_assertions::assert_eq;

    fn game_stats(hot: (u32, u32), cold: (u32, u32)) -> PlayerGameStats {
        PlayerGameStats {
            hot_makes: hot.0,
            hot_attempts: hot.1,
            cold_makes: cold.0,
            cold_attempts: cold.1,
        }
    }

    #[test]
    fn test_record_creates_and_sums() {
        let curry = PlayerKey::from("curry");
        let mut table: CareerTable<PlayerCareerStats> = CareerTable::new();

        table.record(&curry, &game_stats((1, 2), (3, 6)));
        table.record(&curry, &game_stats((2, 2), (0, 1)));

        let stats = table.get(&curry).unwrap();
        assert_eq!(stats.hot_makes, 3);
        assert_eq!(stats.hot_attempts, 4);
        assert_eq!(stats.cold_makes, 3);
        assert_eq!(stats.cold_attempts, 7);
        assert_eq!(stats.total_attempts, 11);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_game_order_does_not_change_totals() {
        let curry = PlayerKey::from("curry");
        let games = vec![
            game_stats((1, 2), (3, 6)),
            game_stats((0, 0), (2, 5)),
            game_stats((4, 7), (1, 1)),
        ];

        let mut forward: CareerTable<PlayerCareerStats> = CareerTable::new();
        for g in &games {
            forward.record(&curry, g);
        }

        let mut backward: CareerTable<PlayerCareerStats> = CareerTable::new();
        for g in games.iter().rev() {
            backward.record(&curry, g);
        }

        assert_eq!(forward.get(&curry), backward.get(&curry));
    }

    #[test]
    fn test_ensure_yields_zero_row() {
        let mut table: CareerTable<PlayerCareerStats> = CareerTable::new();
        table.ensure(&PlayerKey::from("nobody"));

        let row = table.rows()[0].to_row();
        assert_eq!(row.name, "nobody");
        assert_eq!(row.total_attempts, 0);
        assert_eq!(row.total_pct, 0.0);
        assert_eq!(row.cold_pct, 0.0);
        assert_eq!(row.hot_pct, 0.0);
    }

    #[test]
    fn test_merge_partitions() {
        let curry = PlayerKey::from("curry");
        let klay = PlayerKey::from("klay");

        let mut left: CareerTable<PlayerCareerStats> = CareerTable::new();
        left.record(&curry, &game_stats((1, 1), (1, 2)));

        let mut right: CareerTable<PlayerCareerStats> = CareerTable::new();
        right.record(&curry, &game_stats((0, 1), (0, 0)));
        right.record(&klay, &game_stats((0, 0), (2, 3)));

        left.merge(right);

        assert_eq!(left.len(), 2);
        assert_eq!(left.get(&curry).unwrap().total_attempts, 4);
        assert_eq!(left.get(&klay).unwrap().cold_makes, 2);
    }

    #[test]
    fn test_rows_sorted_by_name() {
        let mut table: CareerTable<PlayerPointsStats> = CareerTable::new();
        table.ensure(&PlayerKey::from("zion"));
        table.ensure(&PlayerKey::from("adams"));
        table.ensure(&PlayerKey::from("curry"));

        let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["adams", "curry", "zion"]);
    }

    #[test]
    fn test_collect_season_points() {
        let curry = PlayerKey::from("curry");
        let season = Season::new(
            "2016_17",
            vec![curry.clone()],
            vec![
                Game::new("a.csv".into(), vec![]),
                Game::new("b.csv".into(), vec![]),
            ],
        );

        let mut table: CareerTable<PlayerPointsStats> = CareerTable::new();
        table.collect_season(&GameWalker::default(), &season, &curry);

        let stats = table.get(&curry).unwrap();
        assert_eq!(stats.games, 0);
        assert_eq!(stats.points, 0);
    }
}
