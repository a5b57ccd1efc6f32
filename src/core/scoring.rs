use crate::core::{MatchPolicy, Question};

pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// 空白答案一律算錯，避免空字串被當成任何答案的子字串
pub fn check_answer(question: &Question, user_answer: &str, policy: MatchPolicy) -> bool {
    let given = user_answer.trim().to_lowercase();
    if given.is_empty() {
        return false;
    }
    let expected = question.answer().trim().to_lowercase();

    match policy {
        MatchPolicy::Fuzzy => expected.contains(&given) || given.contains(&expected),
        MatchPolicy::Exact => given == expected,
    }
}

/// 只會增加的分數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    total: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn award(&mut self, points: u32) -> u32 {
        self.total = self.total.saturating_add(points);
        self.total
    }

    pub(crate) fn reset(&mut self) {
        self.total = 0;
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    score: ScoreKeeper,
}

impl Player {
    pub fn new(name: &str) -> Self {
        let mut player = Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            score: ScoreKeeper::new(),
        };
        player.set_name(name);
        player
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 空白名稱會被忽略
    pub fn set_name(&mut self, new_name: &str) {
        let trimmed = new_name.trim();
        if !trimmed.is_empty() {
            self.name = trimmed.to_string();
        }
    }

    pub fn score(&self) -> u32 {
        self.score.total()
    }

    pub fn score_keeper(&self) -> &ScoreKeeper {
        &self.score
    }

    pub(crate) fn score_keeper_mut(&mut self) -> &mut ScoreKeeper {
        &mut self.score
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> Question {
        Question::new("Capital of France?", "Paris", 100, 1)
    }

    #[test]
    fn test_check_answer_ignores_case() {
        for policy in [MatchPolicy::Fuzzy, MatchPolicy::Exact] {
            assert_eq!(
                check_answer(&paris(), "PARIS", policy),
                check_answer(&paris(), "paris", policy)
            );
            assert!(check_answer(&paris(), "  Paris \n", policy));
        }
    }

    #[test]
    fn test_fuzzy_accepts_substrings_both_ways() {
        let q = Question::new("Perfect Cone?", "Mayon Volcano", 100, 1);
        assert!(check_answer(&q, "mayon", MatchPolicy::Fuzzy));
        assert!(check_answer(&q, "the Mayon Volcano in Albay", MatchPolicy::Fuzzy));
        assert!(!check_answer(&q, "Taal", MatchPolicy::Fuzzy));
    }

    #[test]
    fn test_exact_rejects_partial_answers() {
        let q = Question::new("Perfect Cone?", "Mayon Volcano", 100, 1);
        assert!(!check_answer(&q, "mayon", MatchPolicy::Exact));
        assert!(check_answer(&q, "MAYON VOLCANO", MatchPolicy::Exact));
    }

    #[test]
    fn test_blank_answer_is_wrong() {
        assert!(!check_answer(&paris(), "", MatchPolicy::Fuzzy));
        assert!(!check_answer(&paris(), "   ", MatchPolicy::Fuzzy));
        assert!(!check_answer(&paris(), "", MatchPolicy::Exact));
    }

    #[test]
    fn test_score_only_increases() {
        let mut keeper = ScoreKeeper::new();
        assert_eq!(keeper.total(), 0);
        keeper.award(100);
        keeper.award(0);
        keeper.award(400);
        assert_eq!(keeper.total(), 500);
    }

    #[test]
    fn test_player_name_defaults() {
        assert_eq!(Player::new("").name(), DEFAULT_PLAYER_NAME);
        assert_eq!(Player::new("   ").name(), DEFAULT_PLAYER_NAME);
        assert_eq!(Player::new("  Neri ").name(), "Neri");

        let mut player = Player::new("Renz");
        player.set_name(" ");
        assert_eq!(player.name(), "Renz");
        assert_eq!(player.score(), 0);
    }
}
