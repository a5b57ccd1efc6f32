use crate::core::{LeaderboardEntry, Storage};
use crate::utils::error::Result;

pub const DEFAULT_HIGHSCORES_FILE: &str = "highscores.json";
pub const DEFAULT_CAPACITY: usize = 10;

pub struct LeaderboardStore<S: Storage> {
    storage: S,
    path: String,
    capacity: usize,
}

impl<S: Storage> LeaderboardStore<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self::with_capacity(storage, path, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(storage: S, path: impl Into<String>, capacity: usize) -> Self {
        Self {
            storage,
            path: path.into(),
            capacity: capacity.max(1),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 檔案不存在、讀取失敗或格式不符都視為還沒有紀錄
    pub fn load(&self) -> Vec<LeaderboardEntry> {
        let data = match self.storage.read_file(&self.path) {
            Ok(Some(data)) => data,
            Ok(None) => {
                tracing::debug!("No leaderboard at {}, starting fresh", self.path);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not read leaderboard {}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<LeaderboardEntry>>(&data) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable leaderboard {}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// 讀取、加入、穩定排序、截斷，再整份寫回
    pub fn save(&self, name: &str, score: u32) -> Result<Vec<LeaderboardEntry>> {
        let mut entries = self.load();
        entries.push(LeaderboardEntry::new(name, score));
        // sort_by 是穩定排序，同分時先存的排前面
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(self.capacity);

        let data = serde_json::to_vec_pretty(&entries)?;
        self.storage.write_file(&self.path, &data)?;

        tracing::info!("🏆 Saved score {} for {} to {}", score, name, self.path);
        Ok(entries)
    }

    pub fn display(&self) -> String {
        format_standings(&self.load())
    }
}

pub fn format_standings(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return "No high scores yet. Be the first to set one!".to_string();
    }

    let mut lines = vec!["🏆 High Scores Leaderboard 🏆".to_string()];
    lines.extend(
        entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}. {} - ₱{}", idx + 1, entry.name, entry.score)),
    );
    lines.join("\n")
}
