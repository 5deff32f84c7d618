//! Hint - Onboarding Questionnaire
//!
//! A terminal onboarding flow for the Hint app. Walks the user through
//! a short questionnaire, persists the answers to durable local
//! storage, and shows the home screen once onboarding is done.

use std::io;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::{App, AppMode};
use domain::Catalog;
use infrastructure::PreferenceStore;
use presentation::{render_ui, InputHandler};

/// Entry point for the Hint onboarding questionnaire.
///
/// Loads the question catalog, opens the preference store, sets up the
/// terminal interface, and runs the main event loop until the user
/// quits.
///
/// # Errors
///
/// Returns an error if the catalog fails validation, the preference
/// store cannot be opened, or terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin()?;
    let store = PreferenceStore::open_default()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, store);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing. Quits on
/// 'q' from the home screen or Esc while answering questions.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                match key.code {
                    KeyCode::Char('q') if matches!(app.mode, AppMode::Home) => return Ok(()),
                    KeyCode::Esc if matches!(app.mode, AppMode::Onboarding) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
