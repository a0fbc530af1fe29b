use crate::evaluator::evaluate;
use crate::models::{AppMode, AppState, ChoiceOption, Question};
use crate::progress::{ProgressStorage, ProgressStore};
use crossterm::event::{KeyCode, KeyEvent};

/// One walk through a filtered question subset. Transient by design: exiting
/// a quiz discards the position and selection, only submitted answers are
/// durable.
#[derive(Debug)]
pub struct QuizSession {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub selected: Option<usize>,
    pub showing_result: bool,
    pub last_correct: Option<bool>,
    pub results: Vec<Option<bool>>,
    pub mode: AppMode,
}

impl QuizSession {
    pub fn new(mode: AppMode, questions: Vec<Question>) -> Self {
        let results = vec![None; questions.len()];
        Self {
            questions,
            current_index: 0,
            selected: None,
            showing_result: false,
            last_correct: None,
            results,
            mode,
        }
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn selected_option(&self) -> Option<&ChoiceOption> {
        self.selected
            .and_then(|i| self.current_question().options.get(i))
    }

    pub fn is_review(&self) -> bool {
        self.mode == AppMode::ReviewErrors
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    pub fn select_next(&mut self) {
        let count = self.current_question().options.len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
    }

    /// Grades the current selection and records it. Gated on an actual
    /// selection; a submission without one is a no-op.
    pub fn submit<S: ProgressStorage>(&mut self, store: &mut ProgressStore<S>) {
        if self.showing_result {
            return;
        }
        let Some(selected) = self.selected_option() else {
            return;
        };

        let is_correct = evaluate(self.current_question(), selected);
        let id = self.current_question().id.clone();
        store.record_answer(&id, is_correct);

        self.results[self.current_index] = Some(is_correct);
        self.last_correct = Some(is_correct);
        self.showing_result = true;
    }

    /// Moves to the next question, or reports the session finished.
    /// State transitions are immediate; any visual delay is the UI's business.
    pub fn advance(&mut self) -> bool {
        if self.is_last_question() {
            return false;
        }
        self.current_index += 1;
        self.selected = None;
        self.showing_result = false;
        self.last_correct = None;
        true
    }

    pub fn restart(&mut self) {
        self.current_index = 0;
        self.selected = None;
        self.showing_result = false;
        self.last_correct = None;
        self.results = vec![None; self.questions.len()];
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| **r == Some(true)).count()
    }

    pub fn wrong_count(&self) -> usize {
        self.results.iter().filter(|r| **r == Some(false)).count()
    }
}

/// Flashcard walk over the short-answer cards. Two-sided reveal, self-graded
/// by the learner; never touches the progress ledger.
#[derive(Debug)]
pub struct FlashcardSession {
    pub cards: Vec<Question>,
    pub current_index: usize,
    pub revealed: bool,
}

impl FlashcardSession {
    pub fn new(cards: Vec<Question>) -> Self {
        Self {
            cards,
            current_index: 0,
            revealed: false,
        }
    }

    pub fn current_card(&self) -> &Question {
        &self.cards[self.current_index]
    }
}

pub fn handle_quiz_input<S: ProgressStorage>(
    session: &mut QuizSession,
    key: KeyEvent,
    store: &mut ProgressStore<S>,
    app_state: &mut AppState,
) {
    if !session.showing_result {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                session.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                session.select_previous();
            }
            KeyCode::Enter => {
                session.submit(store);
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
            }
            KeyCode::Enter => {
                if !session.advance() {
                    *app_state = AppState::Summary;
                }
            }
            _ => {}
        }
    }
}

pub fn handle_flashcard_input(
    session: &mut FlashcardSession,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => {
            *app_state = AppState::Home;
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            session.revealed = !session.revealed;
        }
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
            if session.current_index < session.cards.len().saturating_sub(1) {
                session.current_index += 1;
                session.revealed = false;
            }
        }
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
            if session.current_index > 0 {
                session.current_index -= 1;
                session.revealed = false;
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            *app_state = AppState::Home;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            *app_state = AppState::Quiz;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;
    use crate::progress::ProgressStorage;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::error::Error;

    #[derive(Default)]
    struct MemoryStorage {
        payload: Option<String>,
    }

    impl ProgressStorage for MemoryStorage {
        fn read(&self) -> Option<String> {
            self.payload.clone()
        }

        fn write(&mut self, payload: &str) -> Result<(), Box<dyn Error>> {
            self.payload = Some(payload.to_string());
            Ok(())
        }
    }

    fn store() -> ProgressStore<MemoryStorage> {
        ProgressStore::open(MemoryStorage::default())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn choice_question(id: &str, correct: &str) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::SingleChoice,
            question: format!("问题 {}", id),
            options: vec![
                ChoiceOption::parse("A、一"),
                ChoiceOption::parse("B、二"),
                ChoiceOption::parse("C、三"),
            ],
            correct_answer: correct.to_string(),
            category: "测试".to_string(),
            mnemonic: None,
            explanation: None,
        }
    }

    fn short_answer_card(id: &str) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::ShortAnswer,
            question: format!("卡片 {}", id),
            options: Vec::new(),
            correct_answer: String::new(),
            category: "测试".to_string(),
            mnemonic: Some("口诀".to_string()),
            explanation: Some("解析".to_string()),
        }
    }

    fn quiz_session(ids_and_answers: &[(&str, &str)]) -> QuizSession {
        let questions = ids_and_answers
            .iter()
            .map(|(id, correct)| choice_question(id, correct))
            .collect();
        QuizSession::new(AppMode::PracticeAll, questions)
    }

    #[test]
    fn test_option_selection_moves_and_clamps() {
        let mut session = quiz_session(&[("q1", "A")]);
        assert!(session.selected.is_none());

        session.select_next();
        assert_eq!(session.selected, Some(0));
        session.select_next();
        session.select_next();
        session.select_next();
        assert_eq!(session.selected, Some(2));

        session.select_previous();
        assert_eq!(session.selected, Some(1));
        session.select_previous();
        session.select_previous();
        assert_eq!(session.selected, Some(0));
    }

    #[test]
    fn test_submit_without_selection_is_noop() {
        let mut session = quiz_session(&[("q1", "A")]);
        let mut store = store();

        session.submit(&mut store);
        assert!(!session.showing_result);
        assert!(store.progress().answered.is_empty());
    }

    #[test]
    fn test_submit_records_correct_answer() {
        let mut session = quiz_session(&[("q1", "B")]);
        let mut store = store();

        session.selected = Some(1);
        session.submit(&mut store);

        assert!(session.showing_result);
        assert_eq!(session.last_correct, Some(true));
        assert_eq!(store.progress().correct.get("q1"), Some(&true));
        assert!(store.progress().wrong_ids.is_empty());
    }

    #[test]
    fn test_submit_records_wrong_answer() {
        let mut session = quiz_session(&[("q1", "B")]);
        let mut store = store();

        session.selected = Some(0);
        session.submit(&mut store);

        assert_eq!(session.last_correct, Some(false));
        assert_eq!(store.progress().wrong_ids, vec!["q1".to_string()]);
    }

    #[test]
    fn test_double_submit_records_once() {
        let mut session = quiz_session(&[("q1", "B")]);
        let mut store = store();

        session.selected = Some(0);
        session.submit(&mut store);
        session.submit(&mut store);

        assert_eq!(store.progress().wrong_ids, vec!["q1".to_string()]);
    }

    #[test]
    fn test_advance_resets_transient_state() {
        let mut session = quiz_session(&[("q1", "A"), ("q2", "B")]);
        let mut store = store();

        session.selected = Some(0);
        session.submit(&mut store);
        assert!(session.advance());

        assert_eq!(session.current_index, 1);
        assert!(session.selected.is_none());
        assert!(!session.showing_result);
        assert!(session.last_correct.is_none());
    }

    #[test]
    fn test_advance_reports_finished_on_last_question() {
        let mut session = quiz_session(&[("q1", "A")]);
        assert!(!session.advance());
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_enter_flow_through_quiz_to_summary() {
        let mut session = quiz_session(&[("q1", "A"), ("q2", "A")]);
        let mut store = store();
        let mut app_state = AppState::Quiz;

        // Select option A and submit.
        handle_quiz_input(&mut session, key(KeyCode::Down), &mut store, &mut app_state);
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut store, &mut app_state);
        assert!(session.showing_result);

        // Advance to the second question.
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut store, &mut app_state);
        assert_eq!(session.current_index, 1);
        assert_eq!(app_state, AppState::Quiz);

        // Answer the last question and advance into the summary.
        handle_quiz_input(&mut session, key(KeyCode::Down), &mut store, &mut app_state);
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut store, &mut app_state);
        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut store, &mut app_state);
        assert_eq!(app_state, AppState::Summary);
        assert_eq!(session.correct_count(), 2);
    }

    #[test]
    fn test_enter_without_selection_does_not_submit() {
        let mut session = quiz_session(&[("q1", "A")]);
        let mut store = store();
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Enter), &mut store, &mut app_state);
        assert!(!session.showing_result);
        assert!(store.progress().answered.is_empty());
    }

    #[test]
    fn test_esc_asks_for_quit_confirmation() {
        let mut session = quiz_session(&[("q1", "A")]);
        let mut store = store();
        let mut app_state = AppState::Quiz;

        handle_quiz_input(&mut session, key(KeyCode::Esc), &mut store, &mut app_state);
        assert_eq!(app_state, AppState::QuizQuitConfirm);

        handle_quit_confirm_input(key(KeyCode::Char('n')), &mut app_state);
        assert_eq!(app_state, AppState::Quiz);

        handle_quit_confirm_input(key(KeyCode::Char('y')), &mut app_state);
        assert_eq!(app_state, AppState::Home);
    }

    #[test]
    fn test_restart_clears_results() {
        let mut session = quiz_session(&[("q1", "A")]);
        let mut store = store();

        session.selected = Some(0);
        session.submit(&mut store);
        assert_eq!(session.correct_count(), 1);

        session.restart();
        assert_eq!(session.current_index, 0);
        assert_eq!(session.correct_count(), 0);
        assert!(!session.showing_result);
    }

    #[test]
    fn test_flashcard_reveal_toggle() {
        let mut session = FlashcardSession::new(vec![short_answer_card("s1")]);
        let mut app_state = AppState::Flashcards;

        handle_flashcard_input(&mut session, key(KeyCode::Enter), &mut app_state);
        assert!(session.revealed);
        handle_flashcard_input(&mut session, key(KeyCode::Enter), &mut app_state);
        assert!(!session.revealed);
    }

    #[test]
    fn test_flashcard_navigation_resets_reveal() {
        let mut session =
            FlashcardSession::new(vec![short_answer_card("s1"), short_answer_card("s2")]);
        let mut app_state = AppState::Flashcards;

        session.revealed = true;
        handle_flashcard_input(&mut session, key(KeyCode::Down), &mut app_state);
        assert_eq!(session.current_index, 1);
        assert!(!session.revealed);

        // Already at the last card: stay put.
        handle_flashcard_input(&mut session, key(KeyCode::Down), &mut app_state);
        assert_eq!(session.current_index, 1);

        handle_flashcard_input(&mut session, key(KeyCode::Up), &mut app_state);
        assert_eq!(session.current_index, 0);
    }

    #[test]
    fn test_flashcard_esc_returns_home() {
        let mut session = FlashcardSession::new(vec![short_answer_card("s1")]);
        let mut app_state = AppState::Flashcards;

        handle_flashcard_input(&mut session, key(KeyCode::Esc), &mut app_state);
        assert_eq!(app_state, AppState::Home);
    }
}
