pub mod bank;
pub mod leaderboard;
pub mod question_store;
pub mod scoring;
pub mod session;

pub use crate::domain::model::{LeaderboardEntry, MatchPolicy, Question, QuestionId};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
