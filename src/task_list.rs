//! Task List Logic
//!
//! Pure operations on the visible task collection, the one-row edit lock
//! and the per-task write sequencing. Components reach these through the
//! store helpers; nothing here touches the DOM.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{Task, TaskId};

/// Browser `localeCompare` with the user's default locale
#[cfg(target_arch = "wasm32")]
fn title_order() -> impl Fn(&str, &str) -> Ordering {
    let locales = js_sys::Array::new();
    let options = js_sys::Object::new();
    move |a, b| {
        js_sys::JsString::from(a)
            .locale_compare(b, &locales, &options)
            .cmp(&0)
    }
}

/// Root-locale collation off the browser (native builds and unit tests)
#[cfg(not(target_arch = "wasm32"))]
fn title_order() -> impl Fn(&str, &str) -> Ordering {
    use icu_collator::{Collator, CollatorOptions};

    let collator = Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
    move |a, b| match &collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}

/// Sort by title ascending with a case-sensitive locale compare
/// (`apple` < `Apple` < `banana` < `Éclair` < `Zebra`).
///
/// Stable: tasks with equal titles keep their relative order.
pub fn sort_by_title(tasks: &mut [Task]) {
    let order = title_order();
    tasks.sort_by(|a, b| order(&a.title, &b.title));
}

/// Append a freshly created task and re-sort the whole list
pub fn insert_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.push(task);
    sort_by_title(tasks);
}

/// Replace the task with the same id in place. Returns false if absent.
pub fn replace_task(tasks: &mut [Task], updated: Task) -> bool {
    match tasks.iter_mut().find(|task| task.id == updated.id) {
        Some(task) => {
            *task = updated;
            true
        }
        None => false,
    }
}

/// Remove the task with `id`. Returns false if absent.
pub fn remove_task(tasks: &mut Vec<Task>, id: TaskId) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

/// Unsaved title/description of the row holding the edit lock
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub description: String,
}

impl EditDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
        }
    }

    /// Trimmed task to persist on save, or `None` when the title is blank
    pub fn to_task(&self, id: TaskId, completed: bool) -> Option<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Task {
            id,
            title: title.to_string(),
            description: self.description.trim().to_string(),
            completed,
        })
    }
}

/// Trimmed `(title, description)` for a create request, or `None` when the
/// title is blank and nothing should be sent
pub fn new_task_input(title: &str, description: &str) -> Option<(String, String)> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    Some((title.to_string(), description.trim().to_string()))
}

/// The "no tasks" message is visible exactly when no rows are
pub fn shows_empty_state(tasks: &[Task]) -> bool {
    tasks.is_empty()
}

/// Take the edit lock for `task` if no row holds it and the task has no
/// write in flight
pub fn try_begin_edit(lock: Option<TaskId>, pending: bool, task: &Task) -> Option<EditDraft> {
    match lock {
        Some(_) => None,
        None if pending => None,
        None => Some(EditDraft::from_task(task)),
    }
}

/// Which controls of a row are usable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowControls {
    /// This row holds the edit lock (cells editable, button reads "Save")
    pub is_editing: bool,
    pub edit_enabled: bool,
    pub delete_enabled: bool,
    pub checkbox_enabled: bool,
}

/// Derive a row's controls from the edit lock and the row's pending writes.
///
/// While any row is editing, only that row's Save button stays enabled.
/// While a write for the row is in flight its checkbox and Edit/Save button
/// are disabled until the response arrives.
pub fn row_controls(lock: Option<TaskId>, pending: bool, id: TaskId) -> RowControls {
    match lock {
        None => RowControls {
            is_editing: false,
            edit_enabled: !pending,
            delete_enabled: true,
            checkbox_enabled: !pending,
        },
        Some(active) => RowControls {
            is_editing: active == id,
            edit_enabled: active == id && !pending,
            delete_enabled: false,
            checkbox_enabled: false,
        },
    }
}

/// Sequence numbers for in-flight writes, tracked per task.
///
/// Every write gets a number when issued. A completion is applied only if
/// its number is still the latest one issued for that task.
#[derive(Debug, Clone, Default)]
pub struct WriteSequencer {
    next: u64,
    latest: HashMap<TaskId, u64>,
}

impl WriteSequencer {
    pub fn begin(&mut self, id: TaskId) -> u64 {
        self.next += 1;
        self.latest.insert(id, self.next);
        self.next
    }

    pub fn is_current(&self, id: TaskId, seq: u64) -> bool {
        self.latest.get(&id) == Some(&seq)
    }

    /// True while the latest write issued for `id` has not completed
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.latest.contains_key(&id)
    }

    /// Mark `seq` complete. Returns true if it was the latest write for `id`.
    pub fn finish(&mut self, id: TaskId, seq: u64) -> bool {
        let current = self.is_current(id, seq);
        if current {
            self.latest.remove(&id);
        }
        current
    }

    pub fn forget(&mut self, id: TaskId) {
        self.latest.remove(&id);
    }
}
