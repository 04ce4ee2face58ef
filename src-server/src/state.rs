//! Shared state for HTTP handlers.

use std::sync::Arc;

use crate::domain::Task;
use crate::repository::Repository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Task store
    pub task_repo: Arc<dyn Repository<Task>>,
    /// Reject empty titles on create/update instead of storing them
    pub strict_titles: bool,
}

impl AppState {
    pub fn new(task_repo: Arc<dyn Repository<Task>>) -> Self {
        Self {
            task_repo,
            strict_titles: false,
        }
    }

    #[must_use]
    pub fn with_strict_titles(mut self, strict_titles: bool) -> Self {
        self.strict_titles = strict_titles;
        self
    }
}
