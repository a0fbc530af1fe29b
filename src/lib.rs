pub mod bank;
pub mod db;
pub mod evaluator;
pub mod logger;
pub mod models;
pub mod progress;
pub mod selector;
pub mod session;
pub mod stats;
pub mod ui;

// Re-exports for convenience
pub use bank::{get_bank_files, load_bank, load_bank_file};
pub use db::{init_db, SqliteStorage, PROGRESS_KEY};
pub use evaluator::evaluate;
pub use models::{AppMode, AppState, ChoiceOption, Question, QuestionType, UserProgress};
pub use progress::{ProgressStorage, ProgressStore};
pub use selector::{gradable_count, select_questions};
pub use session::{
    handle_flashcard_input, handle_quit_confirm_input, handle_quiz_input, FlashcardSession,
    QuizSession,
};
pub use stats::{completion_stats, CompletionStats};
pub use ui::{draw_flashcards, draw_home, draw_quit_confirmation, draw_quiz, draw_summary};
