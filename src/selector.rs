use crate::models::{AppMode, Question, QuestionType, UserProgress};

/// Derives the active question subset for a mode. Pure function of its
/// inputs; output preserves bank order and is never reshuffled here.
///
/// REVIEW_ERRORS legitimately returns an empty vec when nothing is due for
/// review; the caller decides to stay on the home screen in that case.
pub fn select_questions(
    mode: AppMode,
    bank: &[Question],
    progress: &UserProgress,
) -> Vec<Question> {
    bank.iter()
        .filter(|q| match mode {
            AppMode::Flashcards => q.question_type == QuestionType::ShortAnswer,
            AppMode::ReviewErrors => progress.wrong_ids.contains(&q.id),
            AppMode::PracticeChoice => q.question_type == QuestionType::SingleChoice,
            AppMode::PracticeJudgment => q.question_type == QuestionType::Judgment,
            AppMode::PracticeAll => q.question_type != QuestionType::ShortAnswer,
            AppMode::Home => false,
        })
        .cloned()
        .collect()
}

/// Bank size for completion statistics: flashcards are informational and do
/// not count toward the practice total.
pub fn gradable_count(bank: &[Question]) -> usize {
    bank.iter()
        .filter(|q| q.question_type != QuestionType::ShortAnswer)
        .count()
}
