//! Season loading: roster files and play-by-play game tables.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use super::{StorageConfig, StorageError, PLAYERS_FILE};
use crate::models::{Game, PlayerKey, Season, ShotEvent};

/// Read a roster file: one key per line, blank lines ignored.
pub fn load_players(path: &Path) -> Result<Vec<PlayerKey>, StorageError> {
    let file = File::open(path).map_err(|e| StorageError::io(path, e))?;
    let reader = BufReader::new(file);
    let mut players = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| StorageError::io(path, e))?;
        let key = PlayerKey::new(&line);
        if !key.is_empty() {
            players.push(key);
        }
    }

    debug!("Read {} players from {:?}", players.len(), path);
    Ok(players)
}

/// Read one game table, dropping rows that cannot be normalized.
pub fn load_game(path: &Path) -> Result<Game, StorageError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| StorageError::csv(path, e))?;

    let mut events = Vec::new();
    let mut skipped = 0;

    for (line, record) in reader.byte_records().enumerate() {
        let record = record.map_err(|e| StorageError::csv(path, e))?;
        match ShotEvent::from_record(&record) {
            Ok(event) => events.push(event),
            Err(e) => {
                // Every game file has at least its header row land here.
                trace!("Skipping row {} of {:?}: {}", line + 1, path, e);
                skipped += 1;
            }
        }
    }

    let mut game = Game::new(path.to_path_buf(), events);
    game.skipped_rows = skipped;
    Ok(game)
}

/// Load a season's roster and every game file in its directory.
pub fn load_season(config: &StorageConfig, season_id: &str) -> Result<Season, StorageError> {
    let season_dir = config.season_dir(season_id);
    if !season_dir.is_dir() {
        return Err(StorageError::PathNotFound(season_dir));
    }

    let players = load_players(&config.players_file(season_id))?;

    let mut files = glob::glob(&config.game_pattern(season_id)?)?
        .collect::<Result<Vec<PathBuf>, _>>()?;
    files.sort();

    let games = files
        .iter()
        .map(|file| load_game(file))
        .collect::<Result<Vec<Game>, _>>()?;

    let season = Season::new(season_id, players, games);
    info!(
        "Built season {}: {} players, {} games, {} events",
        season.id,
        season.players.len(),
        season.games.len(),
        season.event_count()
    );

    Ok(season)
}

/// Load several seasons, failing on the first one that cannot be read.
pub fn load_seasons(
    config: &StorageConfig,
    season_ids: &[String],
) -> Result<Vec<Season>, StorageError> {
    season_ids
        .iter()
        .map(|id| load_season(config, id))
        .collect()
}

/// Season directories under the data dir that carry a roster file.
pub fn list_seasons(config: &StorageConfig) -> Result<Vec<String>, StorageError> {
    let entries =
        fs::read_dir(&config.data_dir).map_err(|e| StorageError::io(&config.data_dir, e))?;
    let mut seasons = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| StorageError::io(&config.data_dir, e))?;
        let path = entry.path();
        if path.is_dir() && path.join(PLAYERS_FILE).is_file() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                seasons.push(name.to_string());
            }
        }
    }

    seasons.sort();
    Ok(seasons)
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use tempfile::TempDir;

    fn data_dir() -> (TempDir, StorageConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(dir.path().to_path_buf());
        (dir, config)
    }

    #[test]
    fn test_load_players_normalizes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PLAYERS_FILE),
            "Stephen Curry \n  KLAY THOMPSON\n\n draymond green",
        )
        .unwrap();

        let players = load_players(&dir.path().join(PLAYERS_FILE)).unwrap();
        assert_eq!(
            players,
            vec![
                PlayerKey::from("stephen curry"),
                PlayerKey::from("klay thompson"),
                PlayerKey::from("draymond green"),
            ]
        );
    }

    #[test]
    fn test_load_players_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_players(&dir.path().join(PLAYERS_FILE)).unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }

    #[test]
    fn test_load_game_skips_header_and_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        write_game(
            dir.path(),
            "0021600001.csv",
            &[
                pbp_line("11:40", 1, "Stephen Curry", "Curry 3PT Jump Shot (3 PTS)", ""),
                pbp_line("bad", 1, "Stephen Curry", "Curry 3PT Jump Shot (3 PTS)", ""),
                pbp_line("10:00", 1, "Kevin Durant", "", "MISS Durant 3PT Jump Shot"),
            ],
        );

        let game = load_game(&dir.path().join("0021600001.csv")).unwrap();
        assert_eq!(game.events.len(), 2);
        assert_eq!(game.skipped_rows, 2);
        assert_eq!(game.events[0].elapsed_seconds, 20);
        assert_eq!(game.events[1].player, "kevin durant");
        assert!(game.events[1].description.contains("miss durant 3pt"));
    }

    #[test]
    fn test_load_game_keeps_latin1_rows() {
        let dir = tempfile::tempdir().unwrap();
        let mut body = pbp_header().into_bytes();
        for line in [
            pbp_line("11:40", 1, "Stephen Curry", "Curry 3PT Jump Shot (3 PTS)", ""),
            pbp_line("11:00", 1, "Jos\u{e9} Calder\u{f3}n", "", "MISS 3PT Jump Shot"),
        ] {
            body.push(b'\n');
            // Re-encode as Latin-1: every char here fits in one byte.
            body.extend(line.chars().map(|c| c as u32 as u8));
        }
        body.push(b'\n');
        std::fs::write(dir.path().join("0021600002.csv"), &body).unwrap();
        assert!(std::str::from_utf8(&body).is_err());

        let game = load_game(&dir.path().join("0021600002.csv")).unwrap();
        assert_eq!(game.events.len(), 2);
        assert_eq!(game.skipped_rows, 1);
        assert_eq!(game.events[1].player, "jos\u{fffd} calder\u{fffd}n");
        assert!(game.events[1].is_three_attempt());
    }

    #[test]
    fn test_load_game_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_game(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, StorageError::Csv { .. }));
    }

    #[test]
    fn test_load_season() {
        let (dir, config) = data_dir();
        let season_dir = dir.path().join("2016_17");
        std::fs::create_dir(&season_dir).unwrap();
        write_players(&season_dir, &["Stephen Curry"]);
        write_game(&season_dir, "b.csv", &[pbp_line("1:00", 4, "Stephen Curry", "", "")]);
        write_game(&season_dir, "a.csv", &[]);
        std::fs::write(season_dir.join("notes.txt"), "ignored").unwrap();

        let season = load_season(&config, "2016_17").unwrap();
        assert_eq!(season.id, "2016_17");
        assert_eq!(season.players, vec![PlayerKey::from("stephen curry")]);
        assert_eq!(season.games.len(), 2);
        assert!(season.games[0].source.ends_with("a.csv"));
        assert_eq!(season.event_count(), 1);
    }

    #[test]
    fn test_load_season_without_games() {
        let (dir, config) = data_dir();
        let season_dir = dir.path().join("1998_99");
        std::fs::create_dir(&season_dir).unwrap();
        write_players(&season_dir, &["tim duncan"]);

        let season = load_season(&config, "1998_99").unwrap();
        assert!(season.games.is_empty());
        assert_eq!(season.players.len(), 1);
    }

    #[test]
    fn test_load_season_missing_dir() {
        let (_dir, config) = data_dir();
        let err = load_season(&config, "2099_00").unwrap_err();
        assert!(matches!(err, StorageError::PathNotFound(_)));
    }

    #[test]
    fn test_load_season_missing_players_is_fatal() {
        let (dir, config) = data_dir();
        std::fs::create_dir(dir.path().join("2016_17")).unwrap();

        assert!(load_season(&config, "2016_17").is_err());
    }

    #[test]
    fn test_list_seasons() {
        let (dir, config) = data_dir();
        for id in ["2016_17", "2015_16"] {
            let season_dir = dir.path().join(id);
            std::fs::create_dir(&season_dir).unwrap();
            write_players(&season_dir, &["curry"]);
        }
        std::fs::create_dir(dir.path().join("scratch")).unwrap();

        assert_eq!(list_seasons(&config).unwrap(), vec!["2015_16", "2016_17"]);
    }
}
