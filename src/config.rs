use std::path::Path;

use crate::ai::{SearchConfig, MAX_DEPTH};
use crate::error::ConfigError;
use crate::game::Player;

/// Game-loop settings, the `[game]` table of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// The human drops the first piece of every round.
    pub human_first: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { human_first: true }
    }
}

impl GameConfig {
    pub fn first_player(&self) -> Player {
        if self.human_first {
            Player::Human
        } else {
            Player::Ai
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(depth) = self.search.depth {
            if depth == 0 {
                return Err(ConfigError::Validation(
                    "search.depth must be >= 1".into(),
                ));
            }
            if depth > MAX_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "search.depth must be <= {MAX_DEPTH}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
