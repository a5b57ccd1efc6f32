use crate::core::MatchPolicy;
use crate::utils::error::{QuizError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_CAPACITY: usize = 100;
pub const MAX_NAME_CHARS: usize = 32;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub leaderboard: LeaderboardSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSection {
    pub match_policy: Option<MatchPolicy>,
    pub shuffle_on_start: Option<bool>,
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaderboardSection {
    pub path: Option<String>,
    pub capacity: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        // 設定檔讀不到屬於設定錯誤，不是排行榜存取錯誤
        let content = std::fs::read_to_string(&path).map_err(|e| QuizError::ConfigValidationError {
            field: "config_file".to_string(),
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOME})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QuizError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.leaderboard.path {
            validation::validate_path("leaderboard.path", path)?;
        }

        if let Some(capacity) = self.leaderboard.capacity {
            validation::validate_range("leaderboard.capacity", capacity, 1, MAX_CAPACITY)?;
        }

        if let Some(name) = &self.game.player_name {
            validation::validate_non_empty_string("game.player_name", name)?;
            validation::validate_max_chars("game.player_name", name.trim(), MAX_NAME_CHARS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[game]
match_policy = "exact"
shuffle_on_start = true
player_name = "Aili"

[leaderboard]
path = "scores/top.json"
capacity = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.game.match_policy, Some(MatchPolicy::Exact));
        assert_eq!(config.game.shuffle_on_start, Some(true));
        assert_eq!(config.game.player_name.as_deref(), Some("Aili"));
        assert_eq!(config.leaderboard.path.as_deref(), Some("scores/top.json"));
        assert_eq!(config.leaderboard.capacity, Some(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.game.match_policy.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("JEOPARDY_TEST_SCORES_DIR", "/tmp/jeopardy");

        let toml_content = r#"
[leaderboard]
path = "${JEOPARDY_TEST_SCORES_DIR}/highscores.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.leaderboard.path.as_deref(),
            Some("/tmp/jeopardy/highscores.json")
        );

        std::env::remove_var("JEOPARDY_TEST_SCORES_DIR");
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let toml_content = r#"
[game]
match_policy = "telepathic"
"#;
        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, QuizError::TomlParseError(_)));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(
            err,
            QuizError::ConfigValidationError { ref field, .. } if field == "config_file"
        ));
        assert_eq!(err.severity(), crate::utils::error::ErrorSeverity::High);
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[leaderboard]\ncapacity = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[leaderboard]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[game]\nplayer_name = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[game]\nmatch_policy = \"fuzzy\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.game.match_policy, Some(MatchPolicy::Fuzzy));
    }
}
