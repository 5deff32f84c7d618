//! Application state management for the onboarding questionnaire.
//!
//! This module holds the session, the catalog, and the view bookkeeping
//! the terminal UI needs, and implements the mode transitions between
//! the onboarding flow, its modal alerts, the completion screen, and
//! the home screen.

use crate::domain::{
    can_proceed, toggle_selection, Answer, Catalog, Question, QuestionType, Session,
};
use crate::infrastructure::PreferenceStore;

/// Which screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Answering questions
    Onboarding,
    /// A modal alert is shown over the onboarding screen
    Alert,
    /// Onboarding was saved; completion screen is shown
    Completed,
    /// The regular home screen
    Home,
}

/// A user-facing modal message.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

/// Main application state.
///
/// The session is an owned value mutated through methods here; the
/// presentation layer reads it and reports user intent back through
/// these methods.
#[derive(Debug)]
pub struct App {
    /// The static question catalog
    pub catalog: Catalog,
    /// Onboarding progress and collected answers
    pub session: Session,
    /// Durable preference storage
    pub store: PreferenceStore,
    /// Current application mode
    pub mode: AppMode,
    /// Highlighted option index for choice questions
    pub selected_option: usize,
    /// Input buffer for text questions
    pub input: String,
    /// Cursor position within the input buffer, in bytes
    pub cursor_position: usize,
    /// Modal alert, when one is showing
    pub alert: Option<Alert>,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Builds the application state, deciding the initial screen from
    /// the stored completion marker. A storage read failure falls back
    /// to running onboarding and is surfaced in the status bar.
    pub fn new(catalog: Catalog, store: PreferenceStore) -> Self {
        let (completed, status_message) = match store.load_completed() {
            Ok(done) => (done, None),
            Err(e) => (false, Some(format!("Could not read saved preferences: {}", e))),
        };

        let mut app = Self {
            catalog,
            session: Session {
                completed,
                ..Session::default()
            },
            store,
            mode: if completed {
                AppMode::Home
            } else {
                AppMode::Onboarding
            },
            selected_option: 0,
            input: String::new(),
            cursor_position: 0,
            alert: None,
            status_message,
        };
        app.sync_question_view();
        app
    }

    pub fn current_question(&self) -> &Question {
        let index = self.session.current_index.min(self.catalog.last_index());
        &self.catalog.questions()[index]
    }

    pub fn current_answer(&self) -> Option<&Answer> {
        self.session.answer(&self.current_question().id)
    }

    pub fn is_first_question(&self) -> bool {
        self.session.current_index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.session.current_index >= self.catalog.last_index()
    }

    /// One-based progress as (current, total).
    pub fn progress(&self) -> (usize, usize) {
        (self.session.current_index + 1, self.catalog.len())
    }

    /// Whether forward navigation is currently allowed.
    pub fn can_proceed(&self) -> bool {
        can_proceed(self.current_question(), self.current_answer())
    }

    /// Moves to the next question and refreshes the view bookkeeping.
    /// Gating is the caller's responsibility.
    pub fn next_question(&mut self) {
        self.session.next_question(self.catalog.len());
        self.status_message = None;
        self.sync_question_view();
    }

    pub fn previous_question(&mut self) {
        self.session.previous_question();
        self.status_message = None;
        self.sync_question_view();
    }

    /// Reloads the highlight and input buffer from the current question's
    /// stored answer, so revisiting a question shows what was entered.
    fn sync_question_view(&mut self) {
        let question = self.current_question();
        let answer = self.session.answer(&question.id);

        let selected_option = match (question.kind, answer) {
            (QuestionType::Single, Some(answer)) => answer
                .as_text()
                .and_then(|value| question.options.iter().position(|option| option == value))
                .unwrap_or(0),
            _ => 0,
        };
        let input = match (question.kind, answer) {
            (QuestionType::Text, Some(answer)) => {
                answer.as_text().unwrap_or_default().to_string()
            }
            _ => String::new(),
        };

        self.selected_option = selected_option;
        self.cursor_position = input.len();
        self.input = input;
    }

    pub fn select_previous_option(&mut self) {
        self.selected_option = self.selected_option.saturating_sub(1);
    }

    pub fn select_next_option(&mut self) {
        let count = self.current_question().options.len();
        if count > 0 && self.selected_option + 1 < count {
            self.selected_option += 1;
        }
    }

    /// Applies the highlighted option to the session: single-choice
    /// replaces the answer, multi-choice toggles it under the selection
    /// limit.
    pub fn choose_highlighted_option(&mut self) {
        let question = self.current_question();
        let kind = question.kind;
        let limit = question.max_selections;
        let id = question.id.clone();
        let Some(option) = question.options.get(self.selected_option).cloned() else {
            return;
        };

        match kind {
            QuestionType::Single => {
                self.session.update_answer(&id, Answer::Text(option));
            }
            QuestionType::Multi => {
                let current: Vec<String> = self
                    .session
                    .answer(&id)
                    .and_then(Answer::as_selections)
                    .map(<[String]>::to_vec)
                    .unwrap_or_default();
                let updated = toggle_selection(&current, &option, limit);
                self.session.update_answer(&id, Answer::Selections(updated));
            }
            QuestionType::Scale | QuestionType::Text => {}
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
        self.store_text_answer();
    }

    pub fn delete_char_before_cursor(&mut self) {
        let Some(c) = self.input[..self.cursor_position].chars().next_back() else {
            return;
        };
        self.cursor_position -= c.len_utf8();
        self.input.remove(self.cursor_position);
        self.store_text_answer();
    }

    pub fn delete_char_at_cursor(&mut self) {
        if self.cursor_position < self.input.len() {
            self.input.remove(self.cursor_position);
            self.store_text_answer();
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(c) = self.input[..self.cursor_position].chars().next_back() {
            self.cursor_position -= c.len_utf8();
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.input[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.len();
    }

    /// Every keystroke writes through to the session, like the input
    /// views reporting changes as they happen.
    fn store_text_answer(&mut self) {
        let id = self.current_question().id.clone();
        self.session.update_answer(&id, Answer::Text(self.input.clone()));
    }

    pub fn show_required_alert(&mut self) {
        self.alert = Some(Alert {
            title: "Required Field".to_string(),
            message: "Please answer this question before continuing.".to_string(),
        });
        self.mode = AppMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mode = AppMode::Onboarding;
    }

    /// Processes the result of writing the answers to durable storage.
    ///
    /// Success flips the completed flag and moves to the completion
    /// screen. Failure leaves the session uncompleted and raises an
    /// alert so the user can retry.
    pub fn set_save_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.session.completed = true;
                self.status_message = None;
                self.mode = AppMode::Completed;
            }
            Err(e) => {
                self.status_message = Some(format!("Save failed: {}", e));
                self.alert = Some(Alert {
                    title: "Error".to_string(),
                    message: "Failed to save your preferences. Please try again.".to_string(),
                });
                self.mode = AppMode::Alert;
            }
        }
    }

    pub fn enter_home(&mut self) {
        self.mode = AppMode::Home;
    }

    /// Processes the result of clearing durable storage for a redo of
    /// onboarding. Storage is cleared before the in-memory reset; a
    /// failure leaves the home screen as it was.
    pub fn set_reset_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.session.reset();
                self.status_message = None;
                self.mode = AppMode::Onboarding;
                self.sync_question_view();
            }
            Err(e) => {
                self.status_message = Some(format!("Could not reset preferences: {}", e));
            }
        }
    }
}
