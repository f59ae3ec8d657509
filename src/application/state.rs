//! Application state management for the terminal project tracker.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{Priority, Project, SessionStore, TaskDraft, TaskStatus, WorkspaceStore};

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Sign-in form is displayed
    SignIn,
    /// Sign-up form is displayed
    SignUp,
    /// Project list page
    Projects,
    /// Three-column task board page
    Board,
    /// New-project modal is open over the project list
    NewProject,
    /// New-task modal is open over the board
    NewTask,
}

/// Input buffers for the sign-in form.
#[derive(Debug, Default)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

/// Input buffers for the sign-up form.
#[derive(Debug, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
}

/// Input buffers for the new-project modal.
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
}

/// Input buffers for the new-task modal.
#[derive(Debug)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: String,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            assignee: String::new(),
            priority: Priority::default(),
            due_date: String::new(),
        }
    }
}

/// Field index of the priority selector inside the new-task modal.
const TASK_FORM_PRIORITY_FIELD: usize = 3;

/// Main application state containing the two stores and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and route user interactions into the session and workspace stores.
///
/// # Examples
///
/// ```
/// use storyflow::application::{App, AppMode};
/// use storyflow::domain::{InMemorySessionFlags, InstantAuth, SessionStore, WorkspaceStore};
///
/// let session = SessionStore::new(
///     Box::new(InstantAuth),
///     Box::new(InMemorySessionFlags::default()),
/// );
/// let app = App::new(session, WorkspaceStore::new());
/// assert_eq!(app.mode, AppMode::SignIn);
/// ```
pub struct App {
    /// Session store holding the signed-in identity
    pub session: SessionStore,
    /// Workspace store holding projects and tasks
    pub workspace: WorkspaceStore,
    /// Current application mode
    pub mode: AppMode,
    /// Sign-in form buffers
    pub sign_in_form: SignInForm,
    /// Sign-up form buffers
    pub sign_up_form: SignUpForm,
    /// New-project modal buffers
    pub project_form: ProjectForm,
    /// New-task modal buffers
    pub task_form: TaskForm,
    /// Index of the focused field within the current form
    pub focus: usize,
    /// Cursor position within the focused field
    pub cursor_position: usize,
    /// Inline validation error for the current form
    pub form_error: Option<String>,
    /// Cursor within the project list
    pub project_cursor: usize,
    /// Selected board column
    pub board_column: TaskStatus,
    /// Cursor within the selected board column
    pub board_row: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Creates the application state around an initialized session store.
    ///
    /// Lands on the project list when a session was restored, otherwise on
    /// the sign-in form.
    pub fn new(session: SessionStore, workspace: WorkspaceStore) -> Self {
        let mode = if session.identity().is_some() {
            AppMode::Projects
        } else {
            AppMode::SignIn
        };
        Self {
            session,
            workspace,
            mode,
            sign_in_form: SignInForm::default(),
            sign_up_form: SignUpForm::default(),
            project_form: ProjectForm::default(),
            task_form: TaskForm::default(),
            focus: 0,
            cursor_position: 0,
            form_error: None,
            project_cursor: 0,
            board_column: TaskStatus::Todo,
            board_row: 0,
            status_message: None,
        }
    }

    /// Number of focusable fields in the current mode.
    pub fn field_count(&self) -> usize {
        match self.mode {
            AppMode::SignIn => 2,
            AppMode::SignUp => 4,
            AppMode::NewProject => 2,
            AppMode::NewTask => 5,
            AppMode::Projects | AppMode::Board => 0,
        }
    }

    /// Mutable access to the focused text field, if the focused field is a
    /// text field (the priority selector is not).
    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match (self.mode, self.focus) {
            (AppMode::SignIn, 0) => Some(&mut self.sign_in_form.email),
            (AppMode::SignIn, 1) => Some(&mut self.sign_in_form.password),
            (AppMode::SignUp, 0) => Some(&mut self.sign_up_form.name),
            (AppMode::SignUp, 1) => Some(&mut self.sign_up_form.email),
            (AppMode::SignUp, 2) => Some(&mut self.sign_up_form.password),
            (AppMode::SignUp, 3) => Some(&mut self.sign_up_form.confirm_password),
            (AppMode::NewProject, 0) => Some(&mut self.project_form.name),
            (AppMode::NewProject, 1) => Some(&mut self.project_form.description),
            (AppMode::NewTask, 0) => Some(&mut self.task_form.title),
            (AppMode::NewTask, 1) => Some(&mut self.task_form.description),
            (AppMode::NewTask, 2) => Some(&mut self.task_form.assignee),
            (AppMode::NewTask, 4) => Some(&mut self.task_form.due_date),
            _ => None,
        }
    }

    fn active_field_len(&mut self) -> usize {
        self.active_field_mut().map(|f| f.len()).unwrap_or(0)
    }

    /// Moves focus to the next field, wrapping at the end.
    pub fn focus_next(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.cursor_position = self.active_field_len();
        }
    }

    /// Moves focus to the previous field, wrapping at the start.
    pub fn focus_previous(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
            self.cursor_position = self.active_field_len();
        }
    }

    /// Whether the new-task modal's priority selector has focus.
    pub fn priority_field_focused(&self) -> bool {
        self.mode == AppMode::NewTask && self.focus == TASK_FORM_PRIORITY_FIELD
    }

    /// Inserts a character into the focused field at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let pos = self.cursor_position;
        if let Some(field) = self.active_field_mut() {
            if pos <= field.len() {
                field.insert(pos, c);
                self.cursor_position = pos + 1;
            }
        }
    }

    /// Removes the character before the cursor in the focused field.
    pub fn delete_char_before(&mut self) {
        let pos = self.cursor_position;
        if pos == 0 {
            return;
        }
        if let Some(field) = self.active_field_mut() {
            if pos <= field.len() {
                field.remove(pos - 1);
                self.cursor_position = pos - 1;
            }
        }
    }

    /// Removes the character under the cursor in the focused field.
    pub fn delete_char_at(&mut self) {
        let pos = self.cursor_position;
        if let Some(field) = self.active_field_mut() {
            if pos < field.len() {
                field.remove(pos);
            }
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let len = self.active_field_len();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.active_field_len();
    }

    /// Toggles masked rendering of the password fields on the auth forms.
    pub fn toggle_password_visibility(&mut self) {
        match self.mode {
            AppMode::SignIn => self.sign_in_form.show_password = !self.sign_in_form.show_password,
            AppMode::SignUp => self.sign_up_form.show_password = !self.sign_up_form.show_password,
            _ => {}
        }
    }

    /// Cycles the new-task priority selector low → medium → high → low.
    pub fn cycle_priority(&mut self) {
        self.task_form.priority = self.task_form.priority.next();
    }

    /// Switches to the sign-up form, clearing both auth forms.
    pub fn start_sign_up(&mut self) {
        self.mode = AppMode::SignUp;
        self.sign_in_form = SignInForm::default();
        self.sign_up_form = SignUpForm::default();
        self.focus = 0;
        self.cursor_position = 0;
        self.form_error = None;
    }

    /// Switches to the sign-in form, clearing both auth forms.
    pub fn start_sign_in(&mut self) {
        self.mode = AppMode::SignIn;
        self.sign_in_form = SignInForm::default();
        self.sign_up_form = SignUpForm::default();
        self.focus = 0;
        self.cursor_position = 0;
        self.form_error = None;
    }

    /// Submits the sign-in form.
    ///
    /// Presence of both fields is validated here with an inline error; the
    /// session store is never invoked with an empty field. On success the
    /// user lands on the project list.
    pub fn submit_sign_in(&mut self) {
        if self.sign_in_form.email.is_empty() || self.sign_in_form.password.is_empty() {
            self.form_error = Some("Please fill in all fields".to_string());
            return;
        }
        let email = self.sign_in_form.email.clone();
        let password = self.sign_in_form.password.clone();
        let identity = self.session.sign_in(&email, &password);

        self.sign_in_form = SignInForm::default();
        self.form_error = None;
        self.focus = 0;
        self.cursor_position = 0;
        self.project_cursor = 0;
        self.mode = AppMode::Projects;
        self.status_message = Some(format!("Signed in as {}", identity.email));
    }

    /// Submits the sign-up form.
    ///
    /// Validates presence of all four fields, then the password match.
    /// A successful registration routes back to the sign-in form; no
    /// identity is created.
    pub fn submit_sign_up(&mut self) {
        let form = &self.sign_up_form;
        if form.name.is_empty()
            || form.email.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
        {
            self.form_error = Some("Please fill in all fields".to_string());
            return;
        }
        if form.password != form.confirm_password {
            self.form_error = Some("Passwords do not match".to_string());
            return;
        }
        let (name, email, password) = (form.name.clone(), form.email.clone(), form.password.clone());
        self.session.sign_up(&name, &email, &password);

        self.start_sign_in();
        self.status_message = Some("Account created. Sign in to continue".to_string());
    }

    /// Signs out and returns to the sign-in form, dropping all page state.
    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.start_sign_in();
        self.project_cursor = 0;
        self.board_column = TaskStatus::Todo;
        self.board_row = 0;
        self.status_message = None;
    }

    /// The project under the list cursor, if any.
    pub fn project_under_cursor(&self) -> Option<&Project> {
        self.workspace.projects().get(self.project_cursor)
    }

    pub fn move_project_cursor_up(&mut self) {
        if self.project_cursor > 0 {
            self.project_cursor -= 1;
        }
    }

    pub fn move_project_cursor_down(&mut self) {
        let count = self.workspace.projects().len();
        if count > 0 && self.project_cursor < count - 1 {
            self.project_cursor += 1;
        }
    }

    /// Selects the project under the cursor and opens the board.
    ///
    /// The board shows the full task collection: tasks are not scoped to
    /// the selected project.
    pub fn open_selected_project(&mut self) {
        if let Some(project) = self.project_under_cursor() {
            let id = project.id;
            self.workspace.select_project(id);
            self.mode = AppMode::Board;
            self.board_column = TaskStatus::Todo;
            self.board_row = 0;
        }
    }

    /// Returns from the board to the project list.
    pub fn back_to_projects(&mut self) {
        self.mode = AppMode::Projects;
    }

    /// Opens the new-project modal.
    pub fn start_new_project(&mut self) {
        self.mode = AppMode::NewProject;
        self.project_form = ProjectForm::default();
        self.focus = 0;
        self.cursor_position = 0;
        self.form_error = None;
        self.status_message = None;
    }

    /// Opens the new-task modal.
    pub fn start_new_task(&mut self) {
        self.mode = AppMode::NewTask;
        self.task_form = TaskForm::default();
        self.focus = 0;
        self.cursor_position = 0;
        self.form_error = None;
        self.status_message = None;
    }

    /// Closes the open modal without creating anything.
    pub fn cancel_modal(&mut self) {
        match self.mode {
            AppMode::NewProject => {
                self.mode = AppMode::Projects;
                self.project_form = ProjectForm::default();
            }
            AppMode::NewTask => {
                self.mode = AppMode::Board;
                self.task_form = TaskForm::default();
            }
            _ => {}
        }
        self.focus = 0;
        self.cursor_position = 0;
        self.form_error = None;
    }

    /// Submits the new-project modal.
    ///
    /// Silently keeps the modal open when name or description is missing;
    /// this form shows no inline error.
    pub fn submit_new_project(&mut self) {
        if self.project_form.name.is_empty() || self.project_form.description.is_empty() {
            return;
        }
        let name = self.project_form.name.clone();
        let description = self.project_form.description.clone();
        let project = self.workspace.add_project(&name, &description);

        self.mode = AppMode::Projects;
        self.project_form = ProjectForm::default();
        self.focus = 0;
        self.cursor_position = 0;
        self.status_message = Some(format!(
            "Created project \"{}\" (share code {})",
            project.name, project.share_code
        ));
    }

    /// Submits the new-task modal.
    ///
    /// Silently keeps the modal open unless title, description, assignee
    /// and due date are all present. Priority always has a value.
    pub fn submit_new_task(&mut self) {
        let form = &self.task_form;
        if form.title.is_empty()
            || form.description.is_empty()
            || form.assignee.is_empty()
            || form.due_date.is_empty()
        {
            return;
        }
        let task = self.workspace.add_task(TaskDraft {
            title: form.title.clone(),
            description: form.description.clone(),
            assignee: form.assignee.clone(),
            priority: form.priority,
            due_date: form.due_date.clone(),
            ..TaskDraft::default()
        });

        self.mode = AppMode::Board;
        self.task_form = TaskForm::default();
        self.focus = 0;
        self.cursor_position = 0;
        self.status_message = Some(format!("Created task \"{}\"", task.title));
    }

    /// Records the outcome of copying a share code to the clipboard.
    pub fn set_copy_result(&mut self, code: &str, result: Result<(), String>) {
        self.status_message = Some(match result {
            Ok(()) => format!("Share code {} copied to clipboard", code),
            Err(error) => format!("Copy failed: {}", error),
        });
    }

    fn column_index(status: TaskStatus) -> usize {
        TaskStatus::ALL
            .iter()
            .position(|s| *s == status)
            .unwrap_or(0)
    }

    /// Keeps the board row cursor within the selected column.
    fn clamp_board_row(&mut self) {
        let len = self.workspace.tasks_with_status(self.board_column).len();
        if len == 0 {
            self.board_row = 0;
        } else if self.board_row >= len {
            self.board_row = len - 1;
        }
    }

    pub fn move_board_left(&mut self) {
        let index = Self::column_index(self.board_column);
        if index > 0 {
            self.board_column = TaskStatus::ALL[index - 1];
            self.clamp_board_row();
        }
    }

    pub fn move_board_right(&mut self) {
        let index = Self::column_index(self.board_column);
        if index + 1 < TaskStatus::ALL.len() {
            self.board_column = TaskStatus::ALL[index + 1];
            self.clamp_board_row();
        }
    }

    pub fn move_board_up(&mut self) {
        if self.board_row > 0 {
            self.board_row -= 1;
        }
    }

    pub fn move_board_down(&mut self) {
        let len = self.workspace.tasks_with_status(self.board_column).len();
        if len > 0 && self.board_row < len - 1 {
            self.board_row += 1;
        }
    }

    /// Identifier of the task under the board cursor, if any.
    pub fn selected_task_id(&self) -> Option<u64> {
        self.workspace
            .tasks_with_status(self.board_column)
            .get(self.board_row)
            .map(|t| t.id)
    }

    /// Advances the task under the cursor one step along the status ring.
    pub fn advance_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Ok(task) = self.workspace.advance_task(id) {
                self.status_message = Some(format!(
                    "Moved \"{}\" to {}",
                    task.title,
                    task.status.label()
                ));
            }
            self.clamp_board_row();
        }
    }

    /// Deletes the task under the cursor.
    pub fn delete_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Ok(task) = self.workspace.delete_task(id) {
                self.status_message = Some(format!("Deleted task \"{}\"", task.title));
            }
            self.clamp_board_row();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InMemorySessionFlags, InstantAuth, SessionFlags};

    fn test_app() -> App {
        let mut session = SessionStore::new(
            Box::new(InstantAuth),
            Box::new(InMemorySessionFlags::default()),
        );
        session.initialize();
        App::new(session, WorkspaceStore::with_demo_data())
    }

    fn signed_in_app() -> App {
        let mut app = test_app();
        app.sign_in_form.email = "amy@example.com".to_string();
        app.sign_in_form.password = "hunter2".to_string();
        app.submit_sign_in();
        app
    }

    fn type_into_focused(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_app_starts_on_sign_in_without_session() {
        let app = test_app();
        assert_eq!(app.mode, AppMode::SignIn);
        assert!(app.session.identity().is_none());
        assert_eq!(app.focus, 0);
        assert!(app.form_error.is_none());
    }

    #[test]
    fn test_app_starts_on_projects_with_restored_session() {
        let mut flags = InMemorySessionFlags::default();
        flags.store().unwrap();
        let mut session = SessionStore::new(Box::new(InstantAuth), Box::new(flags));
        session.initialize();

        let app = App::new(session, WorkspaceStore::with_demo_data());
        assert_eq!(app.mode, AppMode::Projects);
        assert_eq!(app.session.identity().unwrap().email, "demo@example.com");
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let mut app = test_app();
        app.submit_sign_in();
        assert_eq!(app.mode, AppMode::SignIn);
        assert_eq!(app.form_error.as_deref(), Some("Please fill in all fields"));

        app.sign_in_form.email = "amy@example.com".to_string();
        app.submit_sign_in();
        assert_eq!(app.form_error.as_deref(), Some("Please fill in all fields"));
        assert!(app.session.identity().is_none());
    }

    #[test]
    fn test_sign_in_lands_on_projects() {
        let app = signed_in_app();
        assert_eq!(app.mode, AppMode::Projects);
        assert_eq!(app.session.identity().unwrap().email, "amy@example.com");
        assert!(app.form_error.is_none());
        assert!(app.sign_in_form.password.is_empty());
    }

    #[test]
    fn test_sign_up_reports_missing_fields_and_mismatch() {
        let mut app = test_app();
        app.start_sign_up();

        app.submit_sign_up();
        assert_eq!(app.form_error.as_deref(), Some("Please fill in all fields"));

        app.sign_up_form.name = "Amy".to_string();
        app.sign_up_form.email = "amy@example.com".to_string();
        app.sign_up_form.password = "hunter2".to_string();
        app.sign_up_form.confirm_password = "hunter3".to_string();
        app.submit_sign_up();
        assert_eq!(app.form_error.as_deref(), Some("Passwords do not match"));
        assert_eq!(app.mode, AppMode::SignUp);

        // The user may retry after fixing the mismatch.
        app.sign_up_form.confirm_password = "hunter2".to_string();
        app.submit_sign_up();
        assert_eq!(app.mode, AppMode::SignIn);
        assert!(app.session.identity().is_none());
    }

    #[test]
    fn test_sign_out_returns_to_sign_in() {
        let mut app = signed_in_app();
        app.sign_out();
        assert_eq!(app.mode, AppMode::SignIn);
        assert!(app.session.identity().is_none());
    }

    #[test]
    fn test_field_editing_follows_cursor() {
        let mut app = test_app();
        type_into_focused(&mut app, "amy@example.com");
        assert_eq!(app.sign_in_form.email, "amy@example.com");
        assert_eq!(app.cursor_position, 15);

        app.delete_char_before();
        assert_eq!(app.sign_in_form.email, "amy@example.co");

        app.move_cursor_home();
        app.delete_char_at();
        assert_eq!(app.sign_in_form.email, "my@example.co");

        app.move_cursor_end();
        assert_eq!(app.cursor_position, app.sign_in_form.email.len());
    }

    #[test]
    fn test_focus_wraps_and_resets_cursor() {
        let mut app = test_app();
        type_into_focused(&mut app, "amy@example.com");

        app.focus_next();
        assert_eq!(app.focus, 1);
        assert_eq!(app.cursor_position, 0); // password is empty

        app.focus_next();
        assert_eq!(app.focus, 0);
        assert_eq!(app.cursor_position, app.sign_in_form.email.len());

        app.focus_previous();
        assert_eq!(app.focus, 1);
    }

    #[test]
    fn test_priority_selector_is_not_a_text_field() {
        let mut app = signed_in_app();
        app.open_selected_project();
        app.start_new_task();

        app.focus = TASK_FORM_PRIORITY_FIELD;
        assert!(app.priority_field_focused());
        app.insert_char('x');
        assert!(app.active_field_mut().is_none());

        assert_eq!(app.task_form.priority, Priority::Medium);
        app.cycle_priority();
        assert_eq!(app.task_form.priority, Priority::High);
        app.cycle_priority();
        assert_eq!(app.task_form.priority, Priority::Low);
    }

    #[test]
    fn test_open_selected_project_sets_pointer_and_mode() {
        let mut app = signed_in_app();
        app.move_project_cursor_down();
        app.open_selected_project();

        assert_eq!(app.mode, AppMode::Board);
        assert_eq!(
            app.workspace.selected_project().unwrap().name,
            "Mobile App Development"
        );
        assert_eq!(app.board_column, TaskStatus::Todo);
    }

    #[test]
    fn test_project_cursor_stays_in_bounds() {
        let mut app = signed_in_app();
        app.move_project_cursor_up();
        assert_eq!(app.project_cursor, 0);

        for _ in 0..10 {
            app.move_project_cursor_down();
        }
        assert_eq!(app.project_cursor, app.workspace.projects().len() - 1);
    }

    #[test]
    fn test_new_project_modal_round_trip() {
        let mut app = signed_in_app();
        app.start_new_project();
        assert_eq!(app.mode, AppMode::NewProject);

        // Missing description: the modal stays open without an error.
        type_into_focused(&mut app, "Launch");
        app.submit_new_project();
        assert_eq!(app.mode, AppMode::NewProject);

        app.focus_next();
        type_into_focused(&mut app, "Q1 launch");
        let before = app.workspace.projects().len();
        app.submit_new_project();

        assert_eq!(app.mode, AppMode::Projects);
        assert_eq!(app.workspace.projects().len(), before + 1);
        assert_eq!(app.workspace.projects().last().unwrap().name, "Launch");
        assert!(app.status_message.as_ref().unwrap().contains("Launch"));
    }

    #[test]
    fn test_cancel_modal_discards_input() {
        let mut app = signed_in_app();
        app.start_new_project();
        type_into_focused(&mut app, "Abandoned");
        let before = app.workspace.projects().len();

        app.cancel_modal();
        assert_eq!(app.mode, AppMode::Projects);
        assert_eq!(app.workspace.projects().len(), before);
        assert!(app.project_form.name.is_empty());
    }

    #[test]
    fn test_new_task_modal_creates_todo_task() {
        let mut app = signed_in_app();
        app.open_selected_project();
        app.start_new_task();

        type_into_focused(&mut app, "Spec");
        app.focus_next();
        type_into_focused(&mut app, "write spec");
        app.focus_next();
        type_into_focused(&mut app, "Amy");
        app.focus_next(); // priority selector
        app.cycle_priority(); // medium -> high
        app.focus_next();
        type_into_focused(&mut app, "2024-03-01");

        let before = app.workspace.tasks().len();
        app.submit_new_task();

        assert_eq!(app.mode, AppMode::Board);
        assert_eq!(app.workspace.tasks().len(), before + 1);
        let task = app.workspace.tasks().last().unwrap();
        assert_eq!(task.title, "Spec");
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, "2024-03-01");
    }

    #[test]
    fn test_new_task_modal_requires_all_text_fields() {
        let mut app = signed_in_app();
        app.open_selected_project();
        app.start_new_task();
        let before = app.workspace.tasks().len();

        type_into_focused(&mut app, "Spec");
        app.submit_new_task();

        assert_eq!(app.mode, AppMode::NewTask);
        assert_eq!(app.workspace.tasks().len(), before);
    }

    #[test]
    fn test_board_navigation_clamps_to_columns() {
        let mut app = signed_in_app();
        app.open_selected_project();

        app.move_board_left();
        assert_eq!(app.board_column, TaskStatus::Todo);

        app.move_board_right();
        assert_eq!(app.board_column, TaskStatus::InProgress);
        app.move_board_right();
        assert_eq!(app.board_column, TaskStatus::Done);
        app.move_board_right();
        assert_eq!(app.board_column, TaskStatus::Done);

        app.move_board_up();
        assert_eq!(app.board_row, 0);
        app.move_board_down(); // single task in the demo done column
        assert_eq!(app.board_row, 0);
    }

    #[test]
    fn test_advance_selected_task_moves_it_one_column() {
        let mut app = signed_in_app();
        app.open_selected_project();

        let id = app.selected_task_id().unwrap();
        app.advance_selected_task();

        let task = app.workspace.tasks().iter().find(|t| t.id == id).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(app.status_message.as_ref().unwrap().contains("in progress"));
        // The demo todo column is now empty and the cursor stays clamped.
        assert_eq!(app.board_row, 0);
    }

    #[test]
    fn test_delete_selected_task_removes_it() {
        let mut app = signed_in_app();
        app.open_selected_project();

        let before = app.workspace.tasks().len();
        let id = app.selected_task_id().unwrap();
        app.delete_selected_task();

        assert_eq!(app.workspace.tasks().len(), before - 1);
        assert!(app.workspace.tasks().iter().all(|t| t.id != id));
    }

    #[test]
    fn test_board_actions_with_empty_column_are_no_ops() {
        let mut app = signed_in_app();
        app.open_selected_project();
        app.delete_selected_task(); // empties the demo todo column

        let before = app.workspace.tasks().len();
        app.advance_selected_task();
        app.delete_selected_task();
        assert_eq!(app.workspace.tasks().len(), before);
    }

    #[test]
    fn test_copy_result_sets_status_message() {
        let mut app = signed_in_app();
        app.set_copy_result("WR2024", Ok(()));
        assert!(app.status_message.as_ref().unwrap().contains("WR2024"));

        app.set_copy_result("WR2024", Err("no display".to_string()));
        assert!(app.status_message.as_ref().unwrap().contains("Copy failed"));
    }
}
