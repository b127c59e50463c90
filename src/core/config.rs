//! Match configuration.
//!
//! The rules themselves are fixed; configuration only carries presentation
//! data the engine formats into status text (player display names).
//!
//! ## Loading
//!
//! ```toml
//! [players]
//! x = "Alice"
//! o = "Bob"
//! ```
//!
//! [`load_config`] looks for the file named by `UTTT_CONFIG`, then
//! `uttt.toml` in the current directory, then falls back to defaults.
//! `UTTT_PLAYER_X` / `UTTT_PLAYER_O` override the names afterwards.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::error::ConfigError;
use super::player::Player;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "UTTT_CONFIG";

/// Locations searched for a config file when `UTTT_CONFIG` is unset.
pub const CONFIG_SEARCH_PATHS: &[&str] = &["uttt.toml"];

/// Environment variable overriding X's display name.
pub const PLAYER_X_ENV: &str = "UTTT_PLAYER_X";

/// Environment variable overriding O's display name.
pub const PLAYER_O_ENV: &str = "UTTT_PLAYER_O";

/// Display names for the two players.
///
/// An empty (or all-whitespace) name falls back to `"Player X"` /
/// `"Player O"`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerNames {
    /// Display name for X.
    pub x: String,
    /// Display name for O.
    pub o: String,
}

impl PlayerNames {
    /// Create names for both players.
    pub fn new(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            o: o.into(),
        }
    }

    /// Display name for a player, with fallback.
    ///
    /// Names are trimmed before use, so `"  Bob "` renders as `"Bob"` and an
    /// all-whitespace name falls back to `"Player X"` / `"Player O"`.
    ///
    /// ```
    /// use ultimate_ttt::core::{Player, PlayerNames};
    ///
    /// let names = PlayerNames::new("Alice", "");
    /// assert_eq!(names.name_for(Player::X), "Alice");
    /// assert_eq!(names.name_for(Player::O), "Player O");
    /// ```
    #[must_use]
    pub fn name_for(&self, player: Player) -> &str {
        let (name, fallback) = match player {
            Player::X => (self.x.trim(), "Player X"),
            Player::O => (self.o.trim(), "Player O"),
        };
        if name.is_empty() {
            fallback
        } else {
            name
        }
    }

    /// Set the display name for one player.
    pub fn set(&mut self, player: Player, name: impl Into<String>) {
        match player {
            Player::X => self.x = name.into(),
            Player::O => self.o = name.into(),
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Player display names.
    pub players: PlayerNames,
}

impl MatchConfig {
    /// Create a config with the given player names.
    pub fn with_names(x: impl Into<String>, o: impl Into<String>) -> Self {
        Self {
            players: PlayerNames::new(x, o),
        }
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// Read and parse a config file. No environment overrides are applied.
pub fn load_from_path(path: &Path) -> Result<MatchConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    MatchConfig::from_toml_str(&content)
}

/// Load configuration from the standard locations, then apply
/// `UTTT_PLAYER_X` / `UTTT_PLAYER_O`.
///
/// Never fails: unreadable or malformed files are logged and replaced by
/// defaults.
pub fn load_config() -> MatchConfig {
    load_config_with(|key| std::env::var(key).ok())
}

/// [`load_config`] with an explicit environment lookup.
pub fn load_config_with(lookup: impl Fn(&str) -> Option<String>) -> MatchConfig {
    let config = match find_config_file(&lookup) {
        Some(path) => match load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{} ({}), using defaults", e, path.display());
                MatchConfig::default()
            }
        },
        None => {
            debug!("No config file found, using built-in defaults");
            MatchConfig::default()
        }
    };
    apply_overrides(config, lookup)
}

fn find_config_file(lookup: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = lookup(CONFIG_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_PATH_ENV, path.display());
            return Some(path);
        }
        warn!(
            "{}={} not found, searching defaults",
            CONFIG_PATH_ENV,
            path.display()
        );
    }

    let found = CONFIG_SEARCH_PATHS
        .iter()
        .map(|path| PathBuf::from(*path))
        .find(|path| path.exists());
    if let Some(path) = &found {
        info!("Loading config from {}", path.display());
    }
    found
}

/// Apply `UTTT_PLAYER_X` / `UTTT_PLAYER_O` from the process environment.
pub fn apply_env_overrides(config: MatchConfig) -> MatchConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply player-name overrides from `lookup`.
pub fn apply_overrides(
    mut config: MatchConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> MatchConfig {
    for (player, key) in [(Player::X, PLAYER_X_ENV), (Player::O, PLAYER_O_ENV)] {
        if let Some(name) = lookup(key) {
            debug!("{} overrides display name for {}", key, player);
            config.players.set(player, name);
        }
    }
    config
}
