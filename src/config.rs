//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! board_size = 9
//! walls_per_player = 10
//!
//! [search]
//! max_depth = 3
//! time_limit_ms = 2000
//!
//! [series]
//! games = 10
//! base_seed = 1234
//! max_plies = 200
//! ```

use std::path::Path;

use log::warn;

use crate::errors::{ConfigError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_rules::{
    DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::search::iterative_deepening::SearchConfig;
use crate::utils::engine_match_harness::{MatchConfig, MatchSeriesConfig};

/// Settings for engine-vs-engine series runs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    pub games: u16,
    pub base_seed: u64,
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        let per_game = MatchConfig::default();
        Self {
            games: 10,
            base_seed: 1234,
            max_plies: per_game.max_plies,
            opening_min_plies: per_game.opening_min_plies,
            opening_max_plies: per_game.opening_max_plies,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_size: u8,
    pub walls_per_player: u8,
    pub search: SearchConfig,
    pub series: SeriesSettings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            board_size: DEFAULT_BOARD_SIZE,
            walls_per_player: DEFAULT_WALLS_PER_PLAYER,
            search: SearchConfig::default(),
            series: SeriesSettings::default(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in [{MIN_BOARD_SIZE}, {MAX_BOARD_SIZE}]"
            )));
        }
        if self.search.max_depth == 0 {
            return Err(ConfigError::Validation(
                "search.max_depth must be >= 1".into(),
            ));
        }
        if self.series.games == 0 {
            return Err(ConfigError::Validation("series.games must be > 0".into()));
        }
        if self.series.max_plies == 0 {
            return Err(ConfigError::Validation(
                "series.max_plies must be > 0".into(),
            ));
        }
        if self.series.opening_min_plies > self.series.opening_max_plies {
            return Err(ConfigError::Validation(
                "series.opening_min_plies must be <= series.opening_max_plies".into(),
            ));
        }
        Ok(())
    }

    pub fn new_game(&self) -> QuoridorResult<GameState> {
        GameState::with_rules(self.board_size, self.walls_per_player)
    }

    pub fn match_series_config(&self) -> MatchSeriesConfig {
        MatchSeriesConfig {
            games: self.series.games,
            base_seed: self.series.base_seed,
            per_game: MatchConfig {
                board_size: self.board_size,
                walls_per_player: self.walls_per_player,
                max_plies: self.series.max_plies,
                opening_min_plies: self.series.opening_min_plies,
                opening_max_plies: self.series.opening_max_plies,
                ..MatchConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::quoridor_types::{Cell, Player};

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.board_size, 9);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = EngineConfig::from_toml_str(
            "board_size = 7\n\n[search]\nmax_depth = 2\n",
        )
        .expect("config should parse");
        assert_eq!(config.board_size, 7);
        assert_eq!(config.walls_per_player, 10);
        assert_eq!(config.search.max_depth, 2);
        assert_eq!(config.search.time_limit_ms, Some(2_000));

        let game = config.new_game().expect("valid game");
        assert_eq!(game.pawn(Player::North), Cell::new(0, 3));
        assert_eq!(game.pawn(Player::South), Cell::new(6, 3));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for text in [
            "board_size = 2",
            "board_size = 40",
            "[search]\nmax_depth = 0",
            "[series]\ngames = 0",
            "[series]\nopening_min_plies = 9\nopening_max_plies = 2",
        ] {
            let err = EngineConfig::from_toml_str(text).expect_err(text);
            assert!(matches!(err, ConfigError::Validation(_)), "{text}: {err}");
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("board_size = \"nine\"").expect_err("type mismatch");
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("plum_quoridor_missing_config_file.toml");
        let config = EngineConfig::load_or_default(&path).expect("defaults");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn series_settings_flow_into_the_harness_config() {
        let config = EngineConfig::from_toml_str(
            "board_size = 5\nwalls_per_player = 3\n[series]\ngames = 4\nmax_plies = 60\n",
        )
        .expect("config should parse");
        let series = config.match_series_config();
        assert_eq!(series.games, 4);
        assert_eq!(series.per_game.max_plies, 60);
        assert_eq!(series.per_game.board_size, 5);
        assert_eq!(series.per_game.walls_per_player, 3);
    }
}
