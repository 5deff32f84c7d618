use crate::application::{App, AppMode};
use crate::domain::QuestionType;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Onboarding => Self::handle_onboarding_mode(app, key, modifiers),
            AppMode::Alert => Self::handle_alert_mode(app, key),
            AppMode::Completed => Self::handle_completed_mode(app, key),
            AppMode::Home => Self::handle_home_mode(app, key),
        }
    }

    fn handle_onboarding_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        // Back/Next work the same on every question type.
        match key {
            KeyCode::Tab => {
                Self::request_next(app);
                return;
            }
            KeyCode::BackTab => {
                app.previous_question();
                return;
            }
            _ => {}
        }

        match app.current_question().kind {
            QuestionType::Single | QuestionType::Multi | QuestionType::Scale => {
                Self::handle_choice_keys(app, key)
            }
            QuestionType::Text => Self::handle_text_keys(app, key, modifiers),
        }
    }

    fn handle_choice_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous_option();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next_option();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.choose_highlighted_option();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.previous_question();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                Self::request_next(app);
            }
            _ => {}
        }
    }

    fn handle_text_keys(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Enter => {
                Self::request_next(app);
            }
            KeyCode::Backspace => {
                app.delete_char_before_cursor();
            }
            KeyCode::Delete => {
                app.delete_char_at_cursor();
            }
            KeyCode::Left => {
                app.move_cursor_left();
            }
            KeyCode::Right => {
                app.move_cursor_right();
            }
            KeyCode::Home => {
                app.move_cursor_home();
            }
            KeyCode::End => {
                app.move_cursor_end();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    /// Forward navigation: gate first, then either advance or, on the
    /// last question, persist the answers.
    fn request_next(app: &mut App) {
        if !app.can_proceed() {
            app.show_required_alert();
            return;
        }

        if app.is_last_question() {
            let result = app.store.save_answers(&app.session.answers);
            app.set_save_result(result);
        } else {
            app.next_question();
        }
    }

    fn handle_alert_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                app.dismiss_alert();
            }
            _ => {}
        }
    }

    fn handle_completed_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.enter_home();
            }
            _ => {}
        }
    }

    fn handle_home_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('u') => {
                let result = app.store.clear_onboarding();
                app.set_reset_result(result);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode};
    use crate::domain::{Answer, Catalog, Question, Section, Session};
    use crate::infrastructure::{PreferenceStore, ANSWERS_KEY, COMPLETED_KEY};
    use tempfile::tempdir;

    fn two_question_catalog() -> Catalog {
        Catalog::new(vec![
            Question {
                id: "q1".to_string(),
                section: Section::Relationship,
                prompt: "Pick one".to_string(),
                kind: QuestionType::Single,
                options: vec!["A".to_string(), "B".to_string()],
                required: true,
                placeholder: None,
                max_selections: None,
            },
            Question {
                id: "q2".to_string(),
                section: Section::Additional,
                prompt: "Say something".to_string(),
                kind: QuestionType::Text,
                options: Vec::new(),
                required: true,
                placeholder: None,
                max_selections: None,
            },
        ])
        .unwrap()
    }

    fn app_with(catalog: Catalog) -> (tempfile::TempDir, App) {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join("prefs")).unwrap();
        let app = App::new(catalog, store);
        (dir, app)
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_onboarding_flow_persists_answers() {
        let (_dir, mut app) = app_with(two_question_catalog());

        // Answer q1 with "A" and advance.
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.session.current_index, 1);

        // Advancing without answering q2 blocks at the gate.
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, AppMode::Alert);
        assert_eq!(app.session.current_index, 1);
        assert!(!app.session.completed);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Onboarding);

        // Answer q2 and complete.
        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Completed);
        assert!(app.session.completed);
        assert_eq!(
            app.store.get(ANSWERS_KEY),
            Ok(Some("{\"q1\":\"A\",\"q2\":\"hello\"}".to_string()))
        );
        assert_eq!(app.store.get(COMPLETED_KEY), Ok(Some("true".to_string())));

        // The completion screen hands off to home.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Home);
    }

    #[test]
    fn test_reset_from_home_clears_storage_and_session() {
        let dir = tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join("prefs")).unwrap();
        store.set(COMPLETED_KEY, "true").unwrap();
        store.set(ANSWERS_KEY, "{\"q1\":\"A\"}").unwrap();

        let mut app = App::new(two_question_catalog(), store);
        assert_eq!(app.mode, AppMode::Home);

        press(&mut app, KeyCode::Char('u'));

        assert_eq!(app.mode, AppMode::Onboarding);
        assert_eq!(app.session, Session::default());
        assert_eq!(app.store.get(COMPLETED_KEY), Ok(None));
        assert_eq!(app.store.get(ANSWERS_KEY), Ok(None));
    }

    #[test]
    fn test_choice_navigation_keys() {
        let (_dir, mut app) = app_with(two_question_catalog());

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_option, 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_option, 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.current_answer(), Some(&Answer::Text("B".to_string())));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_option, 0);
    }

    #[test]
    fn test_back_navigation_from_text_question() {
        let (_dir, mut app) = app_with(two_question_catalog());

        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "draft");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.session.current_index, 0);

        // Left on a choice question also goes back (to the clamp).
        press(&mut app, KeyCode::Left);
        assert_eq!(app.session.current_index, 0);

        // The draft answer survives the round trip.
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.input, "draft");
    }

    #[test]
    fn test_text_editing_keys() {
        let (_dir, mut app) = app_with(two_question_catalog());
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);

        type_str(&mut app, "helo");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.input, "hello");

        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.input, "ello");

        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "ell");

        assert_eq!(
            app.session.answer("q2"),
            Some(&Answer::Text("ell".to_string()))
        );
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let (_dir, mut app) = app_with(two_question_catalog());
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_required_gate_ignores_blank_text() {
        let (_dir, mut app) = app_with(two_question_catalog());
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);

        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Alert);
        assert!(!app.session.completed);
        assert_eq!(app.store.get(COMPLETED_KEY), Ok(None));
    }
}
