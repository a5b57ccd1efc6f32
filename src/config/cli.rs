use crate::config::toml_config::TomlConfig;
use crate::config::GameSettings;
use crate::core::MatchPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "jeopardy")]
#[command(about = "Filipino pop culture Jeopardy in the terminal")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where the leaderboard JSON is stored
    #[arg(long)]
    pub highscores: Option<String>,

    /// How many leaderboard entries to keep
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Answer matching policy
    #[arg(long, value_enum)]
    pub match_policy: Option<MatchPolicy>,

    /// Shuffle the board before the first question
    #[arg(long)]
    pub shuffle: bool,

    /// Player name (skips the name prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 先讀 TOML，再套用命令列覆蓋，最後驗證
    pub fn resolve(&self) -> Result<GameSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                GameSettings::from_toml(&config)
            }
            None => GameSettings::default(),
        };

        if let Some(path) = &self.highscores {
            settings.highscores_path = path.clone();
        }
        if let Some(capacity) = self.capacity {
            settings.capacity = capacity;
        }
        if let Some(policy) = self.match_policy {
            settings.match_policy = policy;
        }
        if self.shuffle {
            settings.shuffle_on_start = true;
        }
        if let Some(name) = &self.name {
            settings.player_name = Some(name.clone());
        }

        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
