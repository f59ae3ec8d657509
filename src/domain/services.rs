//! Store services for the project tracker.
//!
//! This module holds the two in-memory stores that carry the whole
//! behavioral surface of the application: the [`WorkspaceStore`] (projects,
//! tasks and the selected-project pointer) and the [`SessionStore`] (the
//! signed-in identity). Both are plain owned structs so they can be
//! exercised in tests without a terminal.

use super::errors::{DomainError, DomainResult};
use super::models::{Identity, Priority, Project, Task, TaskDraft, TaskPatch, TaskStatus};
use rand::Rng;

const SHARE_CODE_LEN: usize = 6;
const SHARE_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates an opaque 6-character uppercase alphanumeric share code.
///
/// Share codes are assigned once at project creation and never change.
fn generate_share_code() -> String {
    let mut rng = rand::thread_rng();
    (0..SHARE_CODE_LEN)
        .map(|_| SHARE_CODE_CHARSET[rng.gen_range(0..SHARE_CODE_CHARSET.len())] as char)
        .collect()
}

/// The full task collection partitioned by status, order preserved.
///
/// This is a pure read-side view: building it never mutates the store, and
/// every task lands in exactly one column.
#[derive(Debug)]
pub struct BoardColumns<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> BoardColumns<'a> {
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Done => &self.done,
        }
    }
}

/// In-memory store for projects, tasks and the selected-project pointer.
///
/// Identifiers are allocated from per-collection monotonic counters, so two
/// entities created back to back can never collide. The task collection is
/// global: tasks carry no reference to a project and the board always shows
/// all of them regardless of which project is selected.
///
/// # Examples
///
/// ```
/// use storyflow::domain::{TaskDraft, TaskStatus, WorkspaceStore};
///
/// let mut store = WorkspaceStore::new();
/// let project = store.add_project("Launch", "Q1 launch");
/// assert_eq!(project.members, 1);
/// assert_eq!(project.share_code.len(), 6);
///
/// let task = store.add_task(TaskDraft {
///     title: "Spec".to_string(),
///     status: TaskStatus::Done, // ignored: new tasks always start at todo
///     ..TaskDraft::default()
/// });
/// assert_eq!(task.status, TaskStatus::Todo);
/// ```
#[derive(Debug)]
pub struct WorkspaceStore {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    selected: Option<u64>,
    next_project_id: u64,
    next_task_id: u64,
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            tasks: Vec::new(),
            selected: None,
            next_project_id: 1,
            next_task_id: 1,
        }
    }

    /// Creates a store seeded with the demo projects and tasks shown on
    /// first launch.
    pub fn with_demo_data() -> Self {
        let projects = vec![
            Project {
                id: 1,
                name: "Website Redesign".to_string(),
                description: "Complete website overhaul project".to_string(),
                members: 5,
                tasks: 12,
                share_code: "WR2024".to_string(),
                created_at: "2024-01-15".to_string(),
            },
            Project {
                id: 2,
                name: "Mobile App Development".to_string(),
                description: "iOS and Android app development".to_string(),
                members: 8,
                tasks: 24,
                share_code: "MAD2024".to_string(),
                created_at: "2024-01-20".to_string(),
            },
        ];
        let tasks = vec![
            Task {
                id: 1,
                title: "Design Homepage".to_string(),
                description: "Create mockups for new homepage".to_string(),
                status: TaskStatus::Todo,
                assignee: "John Doe".to_string(),
                priority: Priority::High,
                due_date: "2024-02-01".to_string(),
            },
            Task {
                id: 2,
                title: "Setup Development Environment".to_string(),
                description: "Configure development tools and dependencies".to_string(),
                status: TaskStatus::InProgress,
                assignee: "Jane Smith".to_string(),
                priority: Priority::Medium,
                due_date: "2024-01-25".to_string(),
            },
            Task {
                id: 3,
                title: "Write Documentation".to_string(),
                description: "Create user documentation".to_string(),
                status: TaskStatus::Done,
                assignee: "Mike Johnson".to_string(),
                priority: Priority::Low,
                due_date: "2024-01-20".to_string(),
            },
        ];
        Self {
            next_project_id: projects.len() as u64 + 1,
            next_task_id: tasks.len() as u64 + 1,
            projects,
            tasks,
            selected: None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Resolves the selected-project pointer against the collection.
    ///
    /// Returns `None` when nothing is selected or when the pointer does not
    /// match any project (selection is never validated at set time).
    pub fn selected_project(&self) -> Option<&Project> {
        self.selected
            .and_then(|id| self.projects.iter().find(|p| p.id == id))
    }

    /// Sets the selected-project pointer. The id is not checked against the
    /// collection.
    pub fn select_project(&mut self, id: u64) {
        self.selected = Some(id);
    }

    /// Creates a project and appends it to the collection.
    ///
    /// The new project gets a fresh identifier, a generated share code,
    /// one member (the creator), zero tasks and today's date.
    pub fn add_project(&mut self, name: &str, description: &str) -> Project {
        let project = Project {
            id: self.next_project_id,
            name: name.to_string(),
            description: description.to_string(),
            members: 1,
            tasks: 0,
            share_code: generate_share_code(),
            created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        self.next_project_id += 1;
        self.projects.push(project.clone());
        project
    }

    /// Creates a task from the draft and appends it to the collection.
    ///
    /// The draft's status is ignored: every new task starts at `Todo`.
    pub fn add_task(&mut self, draft: TaskDraft) -> Task {
        let task = Task {
            id: self.next_task_id,
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Todo,
            assignee: draft.assignee,
            priority: draft.priority,
            due_date: draft.due_date,
        };
        self.next_task_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Merges the patch over the task with the given id.
    ///
    /// Returns the updated task, or [`DomainError::TaskNotFound`] with the
    /// collection untouched when no task matches. Callers that want silent
    /// no-op semantics can discard the result.
    pub fn update_task(&mut self, id: u64, patch: TaskPatch) -> DomainResult<Task> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                patch.apply_to(task);
                Ok(task.clone())
            }
            None => Err(DomainError::TaskNotFound(id)),
        }
    }

    /// Removes the task with the given id from the collection.
    ///
    /// Returns the removed task, or [`DomainError::TaskNotFound`] when no
    /// task matches (a second delete of the same id is a no-op).
    pub fn delete_task(&mut self, id: u64) -> DomainResult<Task> {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => Ok(self.tasks.remove(index)),
            None => Err(DomainError::TaskNotFound(id)),
        }
    }

    /// Moves the task one step along the status ring
    /// (todo → in-progress → done → todo).
    pub fn advance_task(&mut self, id: u64) -> DomainResult<Task> {
        let status = self
            .tasks
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.status)
            .ok_or(DomainError::TaskNotFound(id))?;
        self.update_task(id, TaskPatch::with_status(status.advance()))
    }

    /// Tasks in the given status, in collection order.
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Partitions the full task collection into the three board columns.
    pub fn board(&self) -> BoardColumns<'_> {
        BoardColumns {
            todo: self.tasks_with_status(TaskStatus::Todo),
            in_progress: self.tasks_with_status(TaskStatus::InProgress),
            done: self.tasks_with_status(TaskStatus::Done),
        }
    }
}

/// Authentication capability behind the session store.
///
/// The real system has no backend; implementations only differ in how much
/// simulated latency they add. Neither operation can fail, and the password
/// is never inspected beyond the caller's presence check.
pub trait AuthService {
    /// Produces an identity for the given email with the fixed demo role.
    fn sign_in(&self, email: &str, password: &str) -> Identity;

    /// Simulated account registration. No account state results from it.
    fn sign_up(&self, name: &str, email: &str, password: &str);
}

/// Zero-latency [`AuthService`] used by tests and scripting.
pub struct InstantAuth;

impl AuthService for InstantAuth {
    fn sign_in(&self, email: &str, _password: &str) -> Identity {
        Identity {
            id: 1,
            email: email.to_string(),
            role: "admin".to_string(),
        }
    }

    fn sign_up(&self, _name: &str, _email: &str, _password: &str) {}
}

/// Persistence seam for the single session marker.
///
/// The marker carries no structured data; only its presence matters. The
/// file-backed implementation lives in the infrastructure layer, and
/// [`InMemorySessionFlags`] backs tests.
pub trait SessionFlags {
    fn store(&mut self) -> Result<(), String>;
    fn present(&self) -> bool;
    fn clear(&mut self) -> Result<(), String>;
}

/// Session marker held in memory only; nothing survives the process.
#[derive(Debug, Default)]
pub struct InMemorySessionFlags {
    present: bool,
}

impl SessionFlags for InMemorySessionFlags {
    fn store(&mut self) -> Result<(), String> {
        self.present = true;
        Ok(())
    }

    fn present(&self) -> bool {
        self.present
    }

    fn clear(&mut self) -> Result<(), String> {
        self.present = false;
        Ok(())
    }
}

/// Holds the current signed-in identity, if any.
///
/// At most one identity exists at a time; `sign_in` overwrites
/// unconditionally and `sign_out` always succeeds. There are no token or
/// expiry semantics, only a persisted presence marker that restores a fixed
/// demo identity on the next launch.
///
/// # Examples
///
/// ```
/// use storyflow::domain::{InMemorySessionFlags, InstantAuth, SessionStore};
///
/// let mut session = SessionStore::new(
///     Box::new(InstantAuth),
///     Box::new(InMemorySessionFlags::default()),
/// );
/// let identity = session.sign_in("amy@example.com", "hunter2");
/// assert_eq!(identity.role, "admin");
/// assert!(session.identity().is_some());
///
/// session.sign_out();
/// assert!(session.identity().is_none());
/// ```
pub struct SessionStore {
    identity: Option<Identity>,
    loading: bool,
    auth: Box<dyn AuthService>,
    flags: Box<dyn SessionFlags>,
}

impl SessionStore {
    pub fn new(auth: Box<dyn AuthService>, flags: Box<dyn SessionFlags>) -> Self {
        Self {
            identity: None,
            loading: true,
            auth,
            flags,
        }
    }

    /// Restores the fixed demo identity when a session marker survived a
    /// previous run. No real token validation happens. Clears the loading
    /// flag either way.
    pub fn initialize(&mut self) {
        if self.flags.present() {
            self.identity = Some(Identity {
                id: 1,
                email: "demo@example.com".to_string(),
                role: "admin".to_string(),
            });
        }
        self.loading = false;
    }

    /// Signs in with the given credentials. Never fails.
    ///
    /// The identity is built from the email with the fixed demo role, the
    /// session marker is stored, and any previous identity is overwritten.
    pub fn sign_in(&mut self, email: &str, password: &str) -> Identity {
        let identity = self.auth.sign_in(email, password);
        // A failed marker write only costs the restored session next launch.
        self.flags.store().ok();
        self.identity = Some(identity.clone());
        identity
    }

    /// Runs the simulated registration flow. The session is unchanged.
    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) {
        self.auth.sign_up(name, email, password);
    }

    /// Clears the identity and removes the persisted session marker.
    pub fn sign_out(&mut self) {
        self.identity = None;
        self.flags.clear().ok();
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_session() -> SessionStore {
        SessionStore::new(Box::new(InstantAuth), Box::new(InMemorySessionFlags::default()))
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: format!("{} description", title),
            assignee: "Amy".to_string(),
            due_date: "2024-03-01".to_string(),
            ..TaskDraft::default()
        }
    }

    #[test]
    fn test_add_project_grows_collection_with_fresh_id() {
        let mut store = WorkspaceStore::with_demo_data();
        let before = store.projects().len();
        let existing: Vec<u64> = store.projects().iter().map(|p| p.id).collect();

        let project = store.add_project("Launch", "Q1 launch");

        assert_eq!(store.projects().len(), before + 1);
        assert!(!existing.contains(&project.id));
        assert_eq!(project.members, 1);
        assert_eq!(project.tasks, 0);
    }

    #[test]
    fn test_project_ids_stay_unique_across_many_creations() {
        let mut store = WorkspaceStore::new();
        let mut seen = std::collections::HashSet::new();
        for i in 0..50 {
            let project = store.add_project(&format!("Project {}", i), "desc");
            assert!(seen.insert(project.id), "duplicate id {}", project.id);
        }
    }

    #[test]
    fn test_share_code_is_six_uppercase_alphanumerics() {
        let mut store = WorkspaceStore::new();
        for i in 0..20 {
            let project = store.add_project(&format!("Project {}", i), "desc");
            assert_eq!(project.share_code.len(), 6);
            assert!(project
                .share_code
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_add_task_forces_status_to_todo() {
        let mut store = WorkspaceStore::new();
        for status in TaskStatus::ALL {
            let task = store.add_task(TaskDraft {
                status,
                ..draft("Spec")
            });
            assert_eq!(task.status, TaskStatus::Todo);
        }
    }

    #[test]
    fn test_advance_task_walks_the_ring() {
        let mut store = WorkspaceStore::new();
        let task = store.add_task(draft("Spec"));

        let task = store.advance_task(task.id).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        let task = store.advance_task(task.id).unwrap();
        assert_eq!(task.status, TaskStatus::Done);
        let task = store.advance_task(task.id).unwrap();
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn test_update_unknown_task_leaves_collection_unchanged() {
        let mut store = WorkspaceStore::with_demo_data();
        let before = store.tasks().to_vec();

        let result = store.update_task(999, TaskPatch::with_status(TaskStatus::Done));

        assert_eq!(result, Err(DomainError::TaskNotFound(999)));
        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn test_update_task_merges_partial_fields() {
        let mut store = WorkspaceStore::new();
        let task = store.add_task(draft("Spec"));

        let updated = store
            .update_task(
                task.id,
                TaskPatch {
                    assignee: Some("Jane Smith".to_string()),
                    ..TaskPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.assignee, "Jane Smith");
        assert_eq!(updated.title, task.title);
        assert_eq!(updated.due_date, task.due_date);
    }

    #[test]
    fn test_delete_task_removes_exactly_one_and_is_idempotent() {
        let mut store = WorkspaceStore::with_demo_data();
        let before = store.tasks().len();

        let removed = store.delete_task(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(store.tasks().len(), before - 1);
        assert!(store.tasks().iter().all(|t| t.id != 2));

        let after = store.tasks().to_vec();
        assert_eq!(store.delete_task(2), Err(DomainError::TaskNotFound(2)));
        assert_eq!(store.tasks(), after.as_slice());
    }

    #[test]
    fn test_board_partitions_every_task_exactly_once() {
        let mut store = WorkspaceStore::with_demo_data();
        for i in 0..5 {
            store.add_task(draft(&format!("Task {}", i)));
        }
        store.advance_task(4).unwrap();
        store.advance_task(5).unwrap();
        store.advance_task(5).unwrap();

        let board = store.board();
        let mut seen = std::collections::HashSet::new();
        for column in [&board.todo, &board.in_progress, &board.done] {
            for task in column {
                assert!(seen.insert(task.id), "task {} in two columns", task.id);
            }
        }
        assert_eq!(seen.len(), store.tasks().len());
    }

    #[test]
    fn test_board_columns_preserve_collection_order() {
        let mut store = WorkspaceStore::new();
        for i in 0..6 {
            store.add_task(draft(&format!("Task {}", i)));
        }
        let board = store.board();
        let ids: Vec<u64> = board.todo.iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_select_project_is_not_validated_until_read() {
        let mut store = WorkspaceStore::with_demo_data();
        store.select_project(999);
        assert!(store.selected_project().is_none());

        store.select_project(1);
        assert_eq!(store.selected_project().unwrap().name, "Website Redesign");
    }

    #[test]
    fn test_end_to_end_project_and_task_lifecycle() {
        let mut store = WorkspaceStore::new();

        let project = store.add_project("Launch", "Q1 launch");
        assert_eq!(project.share_code.len(), 6);
        assert_eq!(project.members, 1);
        assert_eq!(project.tasks, 0);

        let task = store.add_task(TaskDraft {
            title: "Spec".to_string(),
            description: "write spec".to_string(),
            assignee: "Amy".to_string(),
            priority: Priority::High,
            due_date: "2024-03-01".to_string(),
            ..TaskDraft::default()
        });
        assert_eq!(task.status, TaskStatus::Todo);

        let task = store.advance_task(task.id).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        store.delete_task(task.id).unwrap();
        assert!(store.tasks().iter().all(|t| t.id != task.id));
    }

    #[test]
    fn test_sign_in_sets_identity_and_sign_out_clears_it() {
        let mut session = test_session();
        session.initialize();
        assert!(session.identity().is_none());
        assert!(!session.is_loading());

        let identity = session.sign_in("amy@example.com", "hunter2");
        assert_eq!(identity.email, "amy@example.com");
        assert_eq!(identity.role, "admin");
        assert_eq!(session.identity(), Some(&identity));

        session.sign_out();
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_sign_in_overwrites_previous_identity() {
        let mut session = test_session();
        session.sign_in("first@example.com", "pw");
        session.sign_in("second@example.com", "pw");
        assert_eq!(session.identity().unwrap().email, "second@example.com");
    }

    #[test]
    fn test_initialize_restores_demo_identity_from_marker() {
        let mut flags = InMemorySessionFlags::default();
        flags.store().unwrap();
        let mut session = SessionStore::new(Box::new(InstantAuth), Box::new(flags));

        assert!(session.is_loading());
        session.initialize();
        assert!(!session.is_loading());
        assert_eq!(session.identity().unwrap().email, "demo@example.com");
    }

    #[test]
    fn test_sign_up_leaves_session_untouched() {
        let mut session = test_session();
        session.initialize();
        session.sign_up("Amy", "amy@example.com", "hunter2");
        assert!(session.identity().is_none());
    }
}
