use crate::core::leaderboard::LeaderboardStore;
use crate::core::question_store::QuestionStore;
use crate::core::scoring::{check_answer, Player};
use crate::core::{LeaderboardEntry, MatchPolicy, Question, QuestionId, Storage};
use crate::utils::error::{QuizError, Result};
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    SelectingCategory,
    SelectingPoints { category: String },
    AnsweringQuestion { question: QuestionId },
    Ended,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::SelectingCategory => write!(f, "selecting a category"),
            Phase::SelectingPoints { category } => write!(f, "selecting points in {}", category),
            Phase::AnsweringQuestion { question } => write!(f, "answering question {}", question),
            Phase::Ended => write!(f, "the game is over"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points_awarded: u32,
    pub correct_answer: String,
    pub total: u32,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct FinalReport {
    pub player: String,
    pub score: u32,
    pub standings: Vec<LeaderboardEntry>,
}

/// 一局遊戲的狀態機：選類別 → 選分數 → 作答 → 回到選類別，直到離開或題目用完
pub struct GameSession<S: Storage> {
    store: QuestionStore,
    player: Player,
    leaderboard: LeaderboardStore<S>,
    policy: MatchPolicy,
    phase: Phase,
    saved: bool,
}

impl<S: Storage> GameSession<S> {
    pub fn new(
        store: QuestionStore,
        player: Player,
        leaderboard: LeaderboardStore<S>,
        policy: MatchPolicy,
    ) -> Self {
        // 空題庫直接結束
        let phase = if store.is_complete() {
            Phase::Ended
        } else {
            Phase::SelectingCategory
        };

        tracing::info!(
            "🎮 New session for {} with {} questions ({} matching)",
            player.name(),
            store.total_questions(),
            policy
        );

        Self {
            store,
            player,
            leaderboard,
            policy,
            phase,
            saved: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn leaderboard(&self) -> &LeaderboardStore<S> {
        &self.leaderboard
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    pub fn available_categories(&self) -> Vec<&str> {
        self.store.available_categories()
    }

    fn phase_error(&self, action: &str) -> QuizError {
        if self.is_over() {
            return QuizError::GameOver;
        }
        QuizError::InvalidTransition {
            action: action.to_string(),
            phase: self.phase.to_string(),
        }
    }

    fn require(&self, action: &str, allowed: bool) -> Result<()> {
        if self.is_over() || !allowed {
            return Err(self.phase_error(action));
        }
        Ok(())
    }

    /// 接受從 1 開始的編號或類別名稱
    pub fn select_category(&mut self, input: &str) -> Result<String> {
        self.require(
            "select a category",
            self.phase == Phase::SelectingCategory,
        )?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(QuizError::InvalidSelection {
                input: input.to_string(),
                reason: "no category given".to_string(),
            });
        }

        let name = match trimmed.parse::<usize>() {
            Ok(index) => {
                let available = self.store.available_categories();
                match index.checked_sub(1).and_then(|i| available.get(i)) {
                    Some(name) => name.to_string(),
                    None => {
                        return Err(QuizError::InvalidSelection {
                            input: trimmed.to_string(),
                            reason: format!("pick a number between 1 and {}", available.len()),
                        })
                    }
                }
            }
            Err(_) => match self.store.find_category(trimmed) {
                Some(category) if category.has_unused() => category.name().to_string(),
                Some(category) => {
                    return Err(QuizError::CategoryExhausted(category.name().to_string()))
                }
                None => return Err(QuizError::UnknownCategory(trimmed.to_string())),
            },
        };

        tracing::debug!("Selected category {}", name);
        self.phase = Phase::SelectingPoints {
            category: name.clone(),
        };
        Ok(name)
    }

    /// 目前類別中尚未使用的分數，依題庫順序 (洗牌後跟著變)
    pub fn point_values(&self) -> Vec<u32> {
        let Phase::SelectingPoints { category } = &self.phase else {
            return Vec::new();
        };
        let mut points: Vec<u32> = Vec::new();
        for question in self.store.unused_in_category(category) {
            if !points.contains(&question.points()) {
                points.push(question.points());
            }
        }
        points
    }

    /// 無效的分數會回到選類別
    pub fn select_points(&mut self, input: &str) -> Result<&Question> {
        let category = match &self.phase {
            Phase::SelectingPoints { category } => category.clone(),
            _ => return Err(self.phase_error("choose a point value")),
        };

        let found = parse_points(input)
            .and_then(|points| self.store.find_by_points(&category, points).map(Question::id));

        match found {
            Ok(id) => {
                tracing::debug!("Selected question {} in {}", id, category);
                self.phase = Phase::AnsweringQuestion { question: id };
                self.store.get(id).ok_or(QuizError::UnknownQuestion(id.0))
            }
            Err(e) => {
                self.phase = Phase::SelectingCategory;
                Err(e)
            }
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match &self.phase {
            Phase::AnsweringQuestion { question } => self.store.get(*question),
            _ => None,
        }
    }

    pub fn submit_answer(&mut self, input: &str) -> Result<AnswerOutcome> {
        let id = match &self.phase {
            Phase::AnsweringQuestion { question } => *question,
            _ => return Err(self.phase_error("answer a question")),
        };

        let question = self.store.get(id).ok_or(QuizError::UnknownQuestion(id.0))?;
        let given = question.resolve_choice(input).unwrap_or(input);
        let correct = check_answer(question, given, self.policy);
        let points = question.points();
        let correct_answer = question.answer().to_string();

        let points_awarded = if correct {
            self.player.score_keeper_mut().award(points);
            points
        } else {
            0
        };
        self.store.mark_used(id)?;

        let game_over = self.store.is_complete();
        self.phase = if game_over {
            Phase::Ended
        } else {
            Phase::SelectingCategory
        };

        tracing::debug!(
            "Question {} answered {} (+{}, total {})",
            id,
            if correct { "correctly" } else { "incorrectly" },
            points_awarded,
            self.player.score()
        );

        Ok(AnswerOutcome {
            correct,
            points_awarded,
            correct_answer,
            total: self.player.score(),
            game_over,
        })
    }

    pub fn shuffle(&mut self) -> Result<()> {
        self.shuffle_with(&mut rand::thread_rng())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.require("shuffle", self.phase == Phase::SelectingCategory)?;
        self.store.shuffle_with(rng);
        Ok(())
    }

    /// 只有 `confirmed` 為真時才會清除分數與題目狀態
    pub fn reset(&mut self, confirmed: bool) -> Result<bool> {
        self.require("reset", self.phase == Phase::SelectingCategory)?;
        if !confirmed {
            return Ok(false);
        }

        self.store.reset();
        self.player.score_keeper_mut().reset();
        tracing::info!("🔄 Session reset for {}", self.player.name());
        Ok(true)
    }

    pub fn quit(&mut self) {
        if !self.is_over() {
            tracing::info!("👋 {} quit with {} points", self.player.name(), self.player.score());
        }
        self.phase = Phase::Ended;
    }

    /// 結束時寫入排行榜，只寫一次
    pub fn finish(&mut self) -> Result<FinalReport> {
        if !self.is_over() {
            return Err(QuizError::InvalidTransition {
                action: "finish the game".to_string(),
                phase: self.phase.to_string(),
            });
        }

        let standings = if self.saved {
            self.leaderboard.load()
        } else {
            let standings = self.leaderboard.save(self.player.name(), self.player.score())?;
            self.saved = true;
            standings
        };

        Ok(FinalReport {
            player: self.player.name().to_string(),
            score: self.player.score(),
            standings,
        })
    }
}

/// 接受 "300"、"₱300"、"$1,000" 這類輸入
pub fn parse_points(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let invalid = || QuizError::InvalidSelection {
        input: trimmed.to_string(),
        reason: "not a point value".to_string(),
    };

    // 千分位只接受 1~3 位數開頭、之後每組剛好 3 位
    let amount = trimmed.trim_start_matches(['₱', '$']).trim();
    let mut groups = amount.split(',');
    let head = groups.next().unwrap_or_default();
    let mut digits = head.to_string();
    let mut grouped = false;
    for group in groups {
        if group.len() != 3 || !group.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.push_str(group);
        grouped = true;
    }
    if grouped && (!(1..=3).contains(&head.len()) || !head.chars().all(|c| c.is_ascii_digit())) {
        return Err(invalid());
    }

    digits.parse::<u32>().map_err(|_| invalid())
}
