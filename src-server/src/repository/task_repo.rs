//! Task Repository Implementation
//!
//! SQLite-backed implementation of Repository<Task>. Every operation is a
//! single parameterized statement.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use crate::domain::{Task, TaskId, DomainResult};
use super::db::DbConnection;
use super::traits::Repository;

/// SQLite implementation of Task repository
pub struct TaskRepository {
    conn: DbConnection,
}

impl TaskRepository {
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Repository<Task> for TaskRepository {
    async fn create(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, ?3)",
            params![entity.title, entity.description, false],
        )?;

        Ok(Task {
            id: conn.last_insert_rowid(),
            title: entity.title.clone(),
            description: entity.description.clone(),
            completed: false,
        })
    }

    async fn find_by_id(&self, id: TaskId) -> DomainResult<Option<Task>> {
        let conn = self.conn.lock().await;

        let task = conn
            .query_row(
                "SELECT id, title, description, completed FROM tasks WHERE id = ?1",
                params![id],
                row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    async fn list(&self) -> DomainResult<Vec<Task>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn.prepare("SELECT id, title, description, completed FROM tasks")?;
        let tasks = stmt
            .query_map([], row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    async fn update(&self, entity: &Task) -> DomainResult<Task> {
        let conn = self.conn.lock().await;

        conn.execute(
            "UPDATE tasks SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4",
            params![entity.title, entity.description, entity.completed, entity.id],
        )?;

        Ok(entity.clone())
    }

    async fn delete(&self, id: TaskId) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(())
    }
}

/// Convert database row to Task
fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
    })
}
