//! Task endpoints.
//!
//! Each handler is a thin pass-through to the task repository with JSON
//! at the boundary:
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/tasks` | `[Task]` |
//! | POST | `/tasks` | `{"task": Task}` |
//! | PUT | `/tasks/:id` | `{"message": "Task updated"}` |
//! | DELETE | `/tasks/:id` | `{"message": "Task deleted"}` |

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::domain::{Task, TaskId};
use crate::error::ServiceError;
use crate::AppState;

/// Task route group.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id", put(update_task).delete(delete_task))
}

/// `POST /tasks` body. Missing fields become empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// `PUT /tasks/:id` body. Full replace: missing fields overwrite with defaults.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// `GET /tasks`
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ServiceError> {
    let tasks = state.task_repo.list().await?;
    tracing::debug!(count = tasks.len(), "Listed tasks");
    Ok(Json(tasks))
}

/// `POST /tasks`
pub async fn create_task(
    State(state): State<AppState>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ServiceError> {
    let task = Task::new(
        0, // ID will be assigned by database
        request.title.unwrap_or_default(),
        request.description.unwrap_or_default(),
    );
    if state.strict_titles {
        task.validate()?;
    }

    let task = state.task_repo.create(&task).await?;
    tracing::info!(id = task.id, "Created task");
    Ok(Json(CreateTaskResponse { task }))
}

/// `PUT /tasks/:id`
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>, ServiceError> {
    let task = Task {
        id,
        title: request.title.unwrap_or_default(),
        description: request.description.unwrap_or_default(),
        completed: request.completed.unwrap_or_default(),
    };
    if state.strict_titles {
        task.validate()?;
    }

    state.task_repo.update(&task).await?;
    tracing::info!(id, completed = task.completed, "Updated task");
    Ok(MessageResponse::new("Task updated"))
}

/// `DELETE /tasks/:id`
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<MessageResponse>, ServiceError> {
    state.task_repo.delete(id).await?;
    tracing::info!(id, "Deleted task");
    Ok(MessageResponse::new("Task deleted"))
}
