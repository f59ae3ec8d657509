use crate::application::{App, AppMode};
use crate::infrastructure::ClipboardService;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::SignIn => Self::handle_sign_in_mode(app, key, modifiers),
            AppMode::SignUp => Self::handle_sign_up_mode(app, key, modifiers),
            AppMode::Projects => Self::handle_projects_mode(app, key),
            AppMode::Board => Self::handle_board_mode(app, key),
            AppMode::NewProject => Self::handle_project_modal_mode(app, key),
            AppMode::NewTask => Self::handle_task_modal_mode(app, key),
        }
    }

    fn handle_sign_in_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('p') => app.toggle_password_visibility(),
                KeyCode::Char('n') => app.start_sign_up(),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Enter => app.submit_sign_in(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            _ => Self::handle_field_editing(app, key),
        }
    }

    fn handle_sign_up_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('p') = key {
                app.toggle_password_visibility();
            }
            return;
        }

        match key {
            KeyCode::Enter => app.submit_sign_up(),
            KeyCode::Esc => app.start_sign_in(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            _ => Self::handle_field_editing(app, key),
        }
    }

    fn handle_projects_mode(app: &mut App, key: KeyCode) {
        // Any keypress retires the previous action's status message.
        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => app.move_project_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_project_cursor_down(),
            KeyCode::Enter => app.open_selected_project(),
            KeyCode::Char('n') => app.start_new_project(),
            KeyCode::Char('c') => {
                if let Some(code) = app.project_under_cursor().map(|p| p.share_code.clone()) {
                    let result = ClipboardService::copy_text(&code);
                    app.set_copy_result(&code, result);
                }
            }
            KeyCode::Char('x') => app.sign_out(),
            KeyCode::Char('q') => {
                // Handled by the main loop.
            }
            _ => {}
        }
    }

    fn handle_board_mode(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Left | KeyCode::Char('h') => app.move_board_left(),
            KeyCode::Right | KeyCode::Char('l') => app.move_board_right(),
            KeyCode::Up | KeyCode::Char('k') => app.move_board_up(),
            KeyCode::Down | KeyCode::Char('j') => app.move_board_down(),
            KeyCode::Enter | KeyCode::Char(' ') => app.advance_selected_task(),
            KeyCode::Char('d') => app.delete_selected_task(),
            KeyCode::Char('n') => app.start_new_task(),
            KeyCode::Esc | KeyCode::Char('p') => app.back_to_projects(),
            KeyCode::Char('x') => app.sign_out(),
            KeyCode::Char('q') => {
                // Handled by the main loop.
            }
            _ => {}
        }
    }

    fn handle_project_modal_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_new_project(),
            KeyCode::Esc => app.cancel_modal(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            _ => Self::handle_field_editing(app, key),
        }
    }

    fn handle_task_modal_mode(app: &mut App, key: KeyCode) {
        if app.priority_field_focused() {
            match key {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    app.cycle_priority();
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Enter => app.submit_new_task(),
            KeyCode::Esc => app.cancel_modal(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            _ => Self::handle_field_editing(app, key),
        }
    }

    fn handle_field_editing(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Backspace => app.delete_char_before(),
            KeyCode::Delete => app.delete_char_at(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }
}
