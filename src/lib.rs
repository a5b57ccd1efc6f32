pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LocalStorage;
pub use app::Console;
pub use config::GameSettings;
pub use crate::core::{
    bank::default_question_bank, leaderboard::LeaderboardStore, question_store::QuestionStore,
    scoring::Player, session::GameSession,
};
pub use utils::error::{QuizError, Result};
