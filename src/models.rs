//! Frontend Models
//!
//! Data structures matching the backend wire format.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the task service
pub type TaskId = i64;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// `POST /tasks` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

/// `PUT` / `DELETE` response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
