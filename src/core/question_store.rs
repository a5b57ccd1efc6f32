use crate::core::{Question, QuestionId};
use crate::utils::error::{QuizError, Result};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    questions: Vec<Question>,
}

impl Category {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn has_unused(&self) -> bool {
        self.questions.iter().any(|q| !q.is_used())
    }
}

/// 依類別分組的題庫，類別依加入順序顯示
#[derive(Debug, Clone, Default)]
pub struct QuestionStore {
    categories: Vec<Category>,
    next_id: u32,
}

impl QuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 類別不存在時自動建立；不做重複檢查
    pub fn add_question(&mut self, category: &str, mut question: Question) -> Result<QuestionId> {
        if question.points() == 0 {
            return Err(QuizError::InvalidQuestion {
                message: format!("'{}' must be worth more than 0 points", question.prompt()),
            });
        }

        self.next_id += 1;
        let id = QuestionId(self.next_id);
        question.assign_id(id);

        // 與 find_category 一樣不分大小寫，否則同名類別會拆成兩個
        let wanted = category.trim().to_lowercase();
        match self
            .categories
            .iter_mut()
            .find(|c| c.name.to_lowercase() == wanted)
        {
            Some(existing) => existing.questions.push(question),
            None => self.categories.push(Category {
                name: category.trim().to_string(),
                questions: vec![question],
            }),
        }

        Ok(id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// 還有未使用題目的類別
    pub fn available_categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|c| c.has_unused())
            .map(|c| c.name.as_str())
            .collect()
    }

    /// 類別名稱比對不分大小寫
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        let wanted = name.trim().to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
    }

    /// 依分數由小到大排序；同分維持加入順序
    pub fn questions_in_category(&self, category: &str) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self
            .find_category(category)
            .map(|c| c.questions.iter().collect())
            .unwrap_or_default();
        questions.sort_by_key(|q| q.points());
        questions
    }

    pub fn unused_in_category(&self, category: &str) -> Vec<&Question> {
        self.find_category(category)
            .map(|c| c.questions.iter().filter(|q| !q.is_used()).collect())
            .unwrap_or_default()
    }

    pub fn find_by_points(&self, category: &str, points: u32) -> Result<&Question> {
        let found = self
            .find_category(category)
            .ok_or_else(|| QuizError::UnknownCategory(category.to_string()))?;

        found
            .questions
            .iter()
            .find(|q| !q.is_used() && q.points() == points)
            .ok_or_else(|| QuizError::PointsNotFound {
                category: found.name.clone(),
                points,
            })
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .find(|q| q.id() == id)
    }

    fn get_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.categories
            .iter_mut()
            .flat_map(|c| c.questions.iter_mut())
            .find(|q| q.id() == id)
    }

    /// 回傳旗標是否真的被改變
    pub fn mark_used(&mut self, id: QuestionId) -> Result<bool> {
        let question = self
            .get_mut(id)
            .ok_or(QuizError::UnknownQuestion(id.0))?;
        Ok(question.mark_used())
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for category in &mut self.categories {
            category.questions.shuffle(rng);
        }
        tracing::debug!("Shuffled {} categories", self.categories.len());
    }

    /// 所有題目都用過才算完成；空題庫視為完成
    pub fn is_complete(&self) -> bool {
        self.categories
            .iter()
            .all(|c| c.questions.iter().all(Question::is_used))
    }

    pub fn reset(&mut self) {
        for question in self.categories.iter_mut().flat_map(|c| c.questions.iter_mut()) {
            question.clear_used();
        }
    }

    pub fn total_questions(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    pub fn remaining_questions(&self) -> usize {
        self.categories
            .iter()
            .flat_map(|c| c.questions.iter())
            .filter(|q| !q.is_used())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn science_store() -> QuestionStore {
        let mut store = QuestionStore::new();
        for (i, points) in [100, 200, 300, 400, 500].into_iter().enumerate() {
            store
                .add_question(
                    "Science",
                    Question::new(format!("Science {}", points), format!("Answer {}", points), points, i as u8 + 1),
                )
                .unwrap();
        }
        store
    }

    fn two_by_two() -> (QuestionStore, Vec<QuestionId>) {
        let mut store = QuestionStore::new();
        let ids = vec![
            store.add_question("A", Question::new("a1", "x", 100, 1)).unwrap(),
            store.add_question("A", Question::new("a2", "x", 200, 2)).unwrap(),
            store.add_question("B", Question::new("b1", "x", 100, 1)).unwrap(),
            store.add_question("B", Question::new("b2", "x", 200, 2)).unwrap(),
        ];
        (store, ids)
    }

    #[test]
    fn test_add_question_creates_category() {
        let mut store = QuestionStore::new();
        assert!(store.questions_in_category("History").is_empty());

        store.add_question("History", Question::new("q", "a", 100, 1)).unwrap();
        assert_eq!(store.category_names(), vec!["History"]);
        assert_eq!(store.questions_in_category("History").len(), 1);
    }

    #[test]
    fn test_add_question_merges_mixed_case_category() {
        let mut store = QuestionStore::new();
        let first = store.add_question("Science", Question::new("q1", "a", 100, 1)).unwrap();
        let second = store.add_question("science", Question::new("q2", "b", 200, 2)).unwrap();
        store.add_question(" SCIENCE ", Question::new("q3", "c", 300, 3)).unwrap();

        assert_eq!(store.category_names(), vec!["Science"]);
        assert_eq!(store.questions_in_category("sCiEnCe").len(), 3);

        store.mark_used(first).unwrap();
        assert_eq!(store.find_by_points("science", 200).unwrap().id(), second);
        store.mark_used(second).unwrap();
        let third = store.find_by_points("Science", 300).unwrap().id();
        store.mark_used(third).unwrap();
        assert!(store.is_complete());
    }

    #[test]
    fn test_zero_points_rejected() {
        let mut store = QuestionStore::new();
        let result = store.add_question("History", Question::new("q", "a", 0, 1));
        assert!(matches!(result, Err(QuizError::InvalidQuestion { .. })));
        assert_eq!(store.total_questions(), 0);
    }

    #[test]
    fn test_questions_sorted_by_points_stable() {
        let mut store = QuestionStore::new();
        store.add_question("Mix", Question::new("third", "a", 300, 3)).unwrap();
        store.add_question("Mix", Question::new("first", "a", 100, 1)).unwrap();
        store.add_question("Mix", Question::new("also 100", "a", 100, 1)).unwrap();

        let prompts: Vec<&str> = store
            .questions_in_category("Mix")
            .iter()
            .map(|q| q.prompt())
            .collect();
        assert_eq!(prompts, vec!["first", "also 100", "third"]);
    }

    #[test]
    fn test_used_question_not_returned_again() {
        let mut store = science_store();
        let id = store.find_by_points("Science", 300).unwrap().id();
        assert!(!store.get(id).unwrap().is_used());

        assert!(store.mark_used(id).unwrap());
        assert!(!store.mark_used(id).unwrap());

        assert!(matches!(
            store.find_by_points("Science", 300),
            Err(QuizError::PointsNotFound { points: 300, .. })
        ));
        assert!(store.unused_in_category("Science").iter().all(|q| q.id() != id));
        assert_eq!(store.unused_in_category("Science").len(), 4);
    }

    #[test]
    fn test_find_by_points_missing_value_leaves_flags() {
        let store = science_store();

        let result = store.find_by_points("Science", 999);
        assert!(matches!(result, Err(QuizError::PointsNotFound { points: 999, .. })));
        assert!(store.questions_in_category("Science").iter().all(|q| !q.is_used()));
    }

    #[test]
    fn test_find_by_points_unknown_category() {
        let store = science_store();
        assert!(matches!(
            store.find_by_points("Geography", 100),
            Err(QuizError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_lookup_ignores_case() {
        let store = science_store();
        assert_eq!(store.find_by_points("science", 100).unwrap().points(), 100);
    }

    #[test]
    fn test_is_complete() {
        let (mut store, ids) = two_by_two();
        assert!(!store.is_complete());

        for id in &ids[..3] {
            store.mark_used(*id).unwrap();
        }
        assert!(!store.is_complete());
        assert_eq!(store.available_categories(), vec!["B"]);

        store.mark_used(ids[3]).unwrap();
        assert!(store.is_complete());
        assert!(store.available_categories().is_empty());
    }

    #[test]
    fn test_reset_clears_flags() {
        let (mut store, ids) = two_by_two();
        for id in &ids {
            store.mark_used(*id).unwrap();
        }
        store.reset();
        assert_eq!(store.remaining_questions(), 4);
        assert!(!store.is_complete());
    }

    #[test]
    fn test_shuffle_keeps_flags_and_members() {
        let mut store = science_store();
        let used = store.find_by_points("Science", 200).unwrap().id();
        store.mark_used(used).unwrap();

        let mut rng = StdRng::seed_from_u64(7);
        store.shuffle_with(&mut rng);

        let mut points: Vec<u32> = store.categories()[0]
            .questions()
            .iter()
            .map(|q| q.points())
            .collect();
        points.sort();
        assert_eq!(points, vec![100, 200, 300, 400, 500]);
        assert!(store.get(used).unwrap().is_used());
        assert_eq!(store.remaining_questions(), 4);

        // 排序檢視不受洗牌影響
        let sorted: Vec<u32> = store
            .questions_in_category("Science")
            .iter()
            .map(|q| q.points())
            .collect();
        assert_eq!(sorted, vec![100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_unknown_id_is_error() {
        let mut store = science_store();
        assert!(matches!(
            store.mark_used(QuestionId(42)),
            Err(QuizError::UnknownQuestion(42))
        ));
    }
}
