use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pm_quiz::{
    bank, completion_stats, db, gradable_count, handle_flashcard_input, handle_quit_confirm_input,
    handle_quiz_input, logger, select_questions, ui, AppMode, AppState, FlashcardSession,
    ProgressStore, Question, QuizSession, SqliteStorage, UserProgress,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::error::Error;
use std::io;
use std::path::Path;

enum StartedSession {
    Quiz(QuizSession),
    Cards(FlashcardSession),
}

/// Builds the session for a selected mode, or `None` when the mode has no
/// questions (review with an empty wrong list stays on the home screen).
fn start_mode(mode: AppMode, bank: &[Question], progress: &UserProgress) -> Option<StartedSession> {
    let questions = select_questions(mode, bank, progress);
    if questions.is_empty() {
        return None;
    }
    if mode == AppMode::Flashcards {
        Some(StartedSession::Cards(FlashcardSession::new(questions)))
    } else {
        Some(StartedSession::Quiz(QuizSession::new(mode, questions)))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    logger::init();

    let conn = db::init_db()?;
    let mut store = ProgressStore::open(SqliteStorage::new(conn));
    let question_bank = bank::load_bank(Path::new("questions"))?;
    let total_questions = gradable_count(&question_bank);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Home;
    let mut home_selected: usize = 0;
    let mut quiz_session: Option<QuizSession> = None;
    let mut flashcard_session: Option<FlashcardSession> = None;

    loop {
        let stats = completion_stats(store.progress(), total_questions);

        terminal.draw(|f| match app_state {
            AppState::Home => ui::draw_home(f, &stats, home_selected),
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    ui::draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => {
                if let Some(session) = &quiz_session {
                    ui::draw_quiz(f, session);
                }
                ui::draw_quit_confirmation(f);
            }
            AppState::Flashcards => {
                if let Some(session) = &flashcard_session {
                    ui::draw_flashcards(f, session);
                }
            }
            AppState::Summary => {
                if let Some(session) = &quiz_session {
                    ui::draw_summary(f, session);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::Home => {
                    let picked = match key.code {
                        KeyCode::Up | KeyCode::Char('k') => {
                            home_selected = home_selected.saturating_sub(1);
                            None
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            if home_selected < ui::MODE_MENU.len() - 1 {
                                home_selected += 1;
                            }
                            None
                        }
                        KeyCode::Enter => Some(ui::MODE_MENU[home_selected].0),
                        KeyCode::Char(c @ '1'..='5') => {
                            let index = c as usize - '1' as usize;
                            home_selected = index;
                            Some(ui::MODE_MENU[index].0)
                        }
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => None,
                    };

                    if let Some(mode) = picked {
                        match start_mode(mode, &question_bank, store.progress()) {
                            Some(StartedSession::Quiz(session)) => {
                                quiz_session = Some(session);
                                app_state = AppState::Quiz;
                            }
                            Some(StartedSession::Cards(session)) => {
                                flashcard_session = Some(session);
                                app_state = AppState::Flashcards;
                            }
                            // Nothing to practice in this mode: stay home.
                            None => {}
                        }
                    }
                }
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        handle_quiz_input(session, key, &mut store, &mut app_state);
                    }
                }
                AppState::QuizQuitConfirm => {
                    handle_quit_confirm_input(key, &mut app_state);
                    if app_state == AppState::Home {
                        quiz_session = None;
                    }
                }
                AppState::Flashcards => {
                    if let Some(session) = &mut flashcard_session {
                        handle_flashcard_input(session, key, &mut app_state);
                        if app_state == AppState::Home {
                            flashcard_session = None;
                        }
                    }
                }
                AppState::Summary => match key.code {
                    KeyCode::Char('r') => {
                        if let Some(session) = &mut quiz_session {
                            session.restart();
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('m') | KeyCode::Esc => {
                        app_state = AppState::Home;
                        quiz_session = None;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
