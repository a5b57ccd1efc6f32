use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 題庫指派的穩定識別碼，洗牌後仍然有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    answer: String,
    options: Vec<String>,
    points: u32,
    difficulty: u8,
    used: bool,
}

impl Question {
    /// 建立尚未加入題庫的題目，id 由 `QuestionStore::add_question` 指派
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>, points: u32, difficulty: u8) -> Self {
        Self {
            id: QuestionId(0),
            prompt: prompt.into(),
            answer: answer.into(),
            options: Vec::new(),
            points,
            difficulty: difficulty.max(1),
            used: false,
        }
    }

    /// 選擇題：顯示選項，答案仍是單一標準答案
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: QuestionId) {
        self.id = id;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_multiple_choice(&self) -> bool {
        !self.options.is_empty()
    }

    /// 選擇題可以只回答選項字母 (A, b, ...)
    pub fn resolve_choice(&self, input: &str) -> Option<&str> {
        let mut chars = input.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if chars.next().is_some() || !letter.is_ascii_uppercase() {
            return None;
        }
        let index = (letter as u8 - b'A') as usize;
        self.options.get(index).map(String::as_str)
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    /// 回傳旗標是否有改變；重複呼叫不會有額外效果
    pub(crate) fn mark_used(&mut self) -> bool {
        let changed = !self.used;
        self.used = true;
        changed
    }

    pub(crate) fn clear_used(&mut self) {
        self.used = false;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum MatchPolicy {
    /// 忽略大小寫，任一方包含另一方即算答對
    #[default]
    Fuzzy,
    /// 忽略大小寫的完全比對，適合選擇題
    Exact,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Fuzzy => write!(f, "fuzzy"),
            MatchPolicy::Exact => write!(f, "exact"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            recorded_at: Some(Utc::now()),
        }
    }
}
