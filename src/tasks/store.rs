// src/tasks/store.rs
// Database operations for tasks

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{NewTask, Task, TaskUpdate};
use crate::error::Result;

const TASK_COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Database store for tasks
#[derive(Clone)]
pub struct TaskStore {
    pool: SqlitePool,
}

impl TaskStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new task, returning the stored record
    pub async fn create(&self, task: NewTask) -> Result<Task> {
        let now = Utc::now();

        let id = sqlx::query(
            "INSERT INTO tasks (title, description, completed, created_at, updated_at)
             VALUES (?, ?, 0, ?, ?)",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        debug!(id, title = %task.title, "task created");

        Ok(Task {
            id,
            title: task.title,
            description: task.description,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Get task by ID
    pub async fn get(&self, task_id: i64) -> Result<Option<Task>> {
        let row = sqlx::query(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"))
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_task).transpose()
    }

    /// List all tasks in creation order
    pub async fn list(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query(&format!("SELECT {TASK_COLUMNS} FROM tasks ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_task).collect()
    }

    /// Apply a partial update; `None` when the task does not exist
    ///
    /// Must stay a single statement: a read followed by a write deadlocks
    /// against concurrent writers on a file database.
    pub async fn update(&self, task_id: i64, update: &TaskUpdate) -> Result<Option<Task>> {
        update.validate()?;
        if update.is_empty() {
            return self.get(task_id).await;
        }

        let description = update.description_change();
        let row = sqlx::query(&format!(
            "UPDATE tasks
             SET title = COALESCE(?, title),
                 description = CASE WHEN ? THEN ? ELSE description END,
                 completed = COALESCE(?, completed),
                 updated_at = ?
             WHERE id = ?
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(update.trimmed_title())
        .bind(description.is_some())
        .bind(description.flatten())
        .bind(update.completed)
        .bind(Utc::now())
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;

        let task = row.as_ref().map(row_to_task).transpose()?;
        if task.is_some() {
            debug!(id = task_id, "task updated");
        }
        Ok(task)
    }

    /// Flip the completed flag
    pub async fn toggle(&self, task_id: i64) -> Result<Option<Task>> {
        let row = sqlx::query(&format!(
            "UPDATE tasks SET completed = NOT completed, updated_at = ?
             WHERE id = ?
             RETURNING {TASK_COLUMNS}"
        ))
        .bind(Utc::now())
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_task).transpose()
    }

    /// Delete a task; false when nothing was deleted
    pub async fn delete(&self, task_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

fn row_to_task(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        completed: row.try_get("completed")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
