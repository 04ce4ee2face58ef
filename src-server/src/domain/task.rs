//! Task Entity
//!
//! A titled, described, completable unit of work. Tasks form a flat
//! collection; display order is decided by the client.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Identifier assigned by the store (SQLite rowid, never reused)
pub type TaskId = i64;

/// A task as persisted and as sent over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Required, non-empty by client contract
    pub title: String,
    /// Optional notes, empty when not given
    #[serde(default)]
    pub description: String,
    /// Completion status
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// True when the title has visible content
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Reject tasks without a visible title
    pub fn validate(&self) -> DomainResult<()> {
        if self.has_title() {
            Ok(())
        } else {
            Err(DomainError::InvalidInput("Task title cannot be empty".to_string()))
        }
    }
}

impl Entity for Task {
    type Id = TaskId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
