//! Task Commands
//!
//! One function per task endpoint. Every non-success status becomes an
//! `Err` carrying the status and the response body.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{CreateTaskResponse, MessageResponse, Task, TaskId};
use super::endpoint;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Serialize)]
struct UpdateTaskArgs<'a> {
    title: &'a str,
    description: &'a str,
    completed: bool,
}

// ========================
// Commands
// ========================

pub async fn list_tasks() -> Result<Vec<Task>, String> {
    let response = reqwest::Client::new()
        .get(endpoint("/tasks"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(response).await
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, String> {
    let response = reqwest::Client::new()
        .post(endpoint("/tasks"))
        .json(args)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let created: CreateTaskResponse = parse_json(response).await?;
    Ok(created.task)
}

/// Full replace: title, description and completed are always sent together.
/// Returns the service's confirmation message.
pub async fn update_task(task: &Task) -> Result<String, String> {
    let args = UpdateTaskArgs {
        title: &task.title,
        description: &task.description,
        completed: task.completed,
    };
    let response = reqwest::Client::new()
        .put(endpoint(&format!("/tasks/{}", task.id)))
        .json(&args)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let reply: MessageResponse = parse_json(response).await?;
    Ok(reply.message)
}

/// Returns the service's confirmation message
pub async fn delete_task(id: TaskId) -> Result<String, String> {
    let response = reqwest::Client::new()
        .delete(endpoint(&format!("/tasks/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let reply: MessageResponse = parse_json(response).await?;
    Ok(reply.message)
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", status, body));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_args_always_carry_every_field() {
        let args = UpdateTaskArgs {
            title: "Buy milk",
            description: "",
            completed: true,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            serde_json::json!({"title": "Buy milk", "description": "", "completed": true})
        );
    }

    #[test]
    fn test_create_response_shape() {
        let body = r#"{"task":{"id":1,"title":"Buy milk","description":"","completed":false}}"#;
        let parsed: CreateTaskResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.task.id, 1);
        assert_eq!(parsed.task.title, "Buy milk");
        assert!(!parsed.task.completed);
    }

    #[test]
    fn test_message_response_shape() {
        let parsed: MessageResponse = serde_json::from_str(r#"{"message":"Task deleted"}"#).unwrap();
        assert_eq!(parsed.message, "Task deleted");
    }
}
