#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::leaderboard::{DEFAULT_CAPACITY, DEFAULT_HIGHSCORES_FILE};
use crate::core::{ConfigProvider, MatchPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, MAX_CAPACITY, MAX_NAME_CHARS};

/// 合併後的設定：預設值 ← TOML ← 命令列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub highscores_path: String,
    pub capacity: usize,
    pub match_policy: MatchPolicy,
    pub shuffle_on_start: bool,
    pub player_name: Option<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            highscores_path: DEFAULT_HIGHSCORES_FILE.to_string(),
            capacity: DEFAULT_CAPACITY,
            match_policy: MatchPolicy::default(),
            shuffle_on_start: false,
            player_name: None,
        }
    }
}

impl GameSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            highscores_path: config
                .leaderboard
                .path
                .clone()
                .unwrap_or(defaults.highscores_path),
            capacity: config.leaderboard.capacity.unwrap_or(defaults.capacity),
            match_policy: config.game.match_policy.unwrap_or(defaults.match_policy),
            shuffle_on_start: config
                .game
                .shuffle_on_start
                .unwrap_or(defaults.shuffle_on_start),
            player_name: config.game.player_name.clone(),
        }
    }
}

impl ConfigProvider for GameSettings {
    fn highscores_path(&self) -> &str {
        &self.highscores_path
    }

    fn leaderboard_capacity(&self) -> usize {
        self.capacity
    }

    fn match_policy(&self) -> MatchPolicy {
        self.match_policy
    }

    fn shuffle_on_start(&self) -> bool {
        self.shuffle_on_start
    }

    fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("highscores_path", &self.highscores_path)?;
        validation::validate_range("capacity", self.capacity, 1, MAX_CAPACITY)?;
        if let Some(name) = &self.player_name {
            validation::validate_non_empty_string("player_name", name)?;
            validation::validate_max_chars("player_name", name.trim(), MAX_NAME_CHARS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.highscores_path(), "highscores.json");
        assert_eq!(settings.leaderboard_capacity(), 10);
        assert_eq!(settings.match_policy(), MatchPolicy::Fuzzy);
        assert!(!settings.shuffle_on_start());
        assert!(settings.player_name().is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = TomlConfig::from_toml_str(
            "[game]\nmatch_policy = \"exact\"\n\n[leaderboard]\ncapacity = 3\n",
        )
        .unwrap();

        let settings = GameSettings::from_toml(&config);
        assert_eq!(settings.match_policy, MatchPolicy::Exact);
        assert_eq!(settings.capacity, 3);
        assert_eq!(settings.highscores_path, "highscores.json");
    }

    #[test]
    fn test_long_name_rejected() {
        let settings = GameSettings {
            player_name: Some("x".repeat(MAX_NAME_CHARS + 1)),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
