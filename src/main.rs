//! StoryFlow - Terminal Project Tracker
//!
//! A terminal-based collaborative project and task tracker, built in Rust.
//! Features a mocked sign-in flow, a project list with shareable invite
//! codes, and a three-column task board with create, advance and delete
//! operations. All state lives in memory apart from a single session
//! marker file.

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
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
use domain::{SessionStore, WorkspaceStore};
use infrastructure::{MockApiAuth, SessionRepository};
use presentation::{render_ui, InputHandler};

/// Entry point for the StoryFlow terminal project tracker.
///
/// Sets up the terminal interface, restores any persisted session,
/// and runs the main event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = SessionStore::new(
        Box::new(MockApiAuth::default()),
        Box::new(SessionRepository::default()),
    );
    session.initialize();
    let mut app = App::new(session, WorkspaceStore::with_demo_data());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Handles terminal rendering and keyboard input processing.
/// Continues running until the user presses 'q' on the project list or
/// the board, or Esc on the sign-in form.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
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
                    KeyCode::Char('q')
                        if matches!(app.mode, AppMode::Projects | AppMode::Board) =>
                    {
                        return Ok(())
                    }
                    KeyCode::Esc if matches!(app.mode, AppMode::SignIn) => return Ok(()),
                    _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                }
            }
        }
    }
}
