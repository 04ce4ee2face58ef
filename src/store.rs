//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The edit lock
//! and the draft live in separate fields so typing into the draft does not
//! re-render every row's controls.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskId};
use crate::task_list::{
    insert_task, remove_task, replace_task, sort_by_title, try_begin_edit, EditDraft,
    WriteSequencer,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Visible tasks, sorted by title
    pub tasks: Vec<Task>,
    /// Row holding the edit lock
    pub editing: Option<TaskId>,
    /// Unsaved values for the editing row
    pub draft: EditDraft,
    /// In-flight write sequence numbers
    pub writes: WriteSequencer,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole list (initial load), sorted
pub fn store_set_tasks(store: &AppStore, mut tasks: Vec<Task>) {
    sort_by_title(&mut tasks);
    *store.tasks().write() = tasks;
}

/// Add a created task and re-sort
pub fn store_add_task(store: &AppStore, task: Task) {
    insert_task(&mut store.tasks().write(), task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated: Task) {
    replace_task(&mut store.tasks().write(), updated);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, id: TaskId) {
    remove_task(&mut store.tasks().write(), id);
    store.writes().write().forget(id);
}

/// Row currently holding the edit lock (tracked)
pub fn editing_id(store: &AppStore) -> Option<TaskId> {
    *store.editing().read()
}

/// Whether a write for `id` is still in flight (tracked)
pub fn write_pending(store: &AppStore, id: TaskId) -> bool {
    store.writes().read().is_pending(id)
}

/// Take the edit lock for `id`. Returns false if another row holds it or
/// a write for `id` has not completed.
pub fn store_begin_edit(store: &AppStore, id: TaskId) -> bool {
    let lock = *store.editing().read_untracked();
    let pending = store.writes().read_untracked().is_pending(id);
    let task = store.tasks().read_untracked().iter().find(|t| t.id == id).cloned();
    let Some(draft) = task.and_then(|task| try_begin_edit(lock, pending, &task)) else {
        return false;
    };

    *store.draft().write() = draft;
    *store.editing().write() = Some(id);
    true
}

/// Mutate the draft of the editing row
pub fn store_edit_draft(store: &AppStore, f: impl FnOnce(&mut EditDraft)) {
    let field = store.draft();
    let mut draft = field.write();
    f(&mut *draft);
}

/// Apply a saved edit and release the lock
pub fn store_finish_edit(store: &AppStore, saved: Task) {
    replace_task(&mut store.tasks().write(), saved);
    *store.editing().write() = None;
    *store.draft().write() = EditDraft::default();
}

/// Register an outgoing write for `id`
pub fn store_begin_write(store: &AppStore, id: TaskId) -> u64 {
    store.writes().write().begin(id)
}

/// Complete a write. Returns true if its response should be applied.
pub fn store_finish_write(store: &AppStore, id: TaskId, seq: u64) -> bool {
    store.writes().write().finish(id, seq)
}
