/// Task model and database operations
///
/// Tasks are the core entity of TaskDeck: a unit of work owned by exactly
/// one user, carrying a title, a free-form description, and one of three
/// status values.
///
/// # Status values
///
/// ```text
/// pending | in-progress | completed
/// ```
///
/// There is no transition graph — any status may be set on any update.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     title TEXT NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     status TEXT NOT NULL DEFAULT 'pending'
///         CHECK (status IN ('pending', 'in-progress', 'completed')),
///     createdAt DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
///     updatedAt DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now')),
///     user_id INTEGER REFERENCES users(id)
/// );
/// ```
///
/// `user_id` is nullable only for rows that predate the ownership
/// migration; such legacy rows are invisible to every scoped operation
/// here. New rows are always created with an owner.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet (the default for new tasks)
    Pending,

    /// Being worked on
    InProgress,

    /// Done
    Completed,
}

impl TaskStatus {
    /// Converts status to its stored string form
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Parses a stored or client-supplied status string
    ///
    /// Returns `None` for anything outside the three known values; the
    /// caller decides whether that is a validation error or a default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(TaskStatus::Pending),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// Task model representing one unit of work
///
/// The JSON field names mirror the stored column names, camelCase
/// timestamps included, so a serialized `Task` is exactly the wire shape
/// the API promises.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID, assigned by the store
    pub id: i64,

    /// Owning user; NULL only on legacy rows from before the ownership
    /// migration
    pub user_id: Option<i64>,

    /// Short human-readable title
    pub title: String,

    /// Free-form description, empty string when not provided
    pub description: String,

    /// One of `pending`, `in-progress`, `completed`
    pub status: String,

    /// When the task was created; never changes afterwards
    #[sqlx(rename = "createdAt")]
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,

    /// Refreshed by every update
    #[sqlx(rename = "updatedAt")]
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDateTime,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Owner of the new task; creation is never unowned
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Input for updating an existing task
///
/// Ownership is not part of the update set — a task can never change
/// hands through this API.
#[derive(Debug, Clone)]
pub struct UpdateTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new task and returns the persisted row
    ///
    /// The returned row carries the store-assigned id and timestamps, so
    /// responses built from it reflect persisted state rather than the
    /// request payload.
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, title, description, status)
            VALUES (?, ?, ?, ?)
            RETURNING id, user_id, title, description, status, createdAt, updatedAt
            "#,
        )
        .bind(data.user_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.status.as_str())
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID without ownership scoping
    ///
    /// Handlers use this to re-read a row after a scoped mutation already
    /// proved ownership; anything answering directly to a client must go
    /// through [`Task::find_by_id_for_user`] instead.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, status, createdAt, updatedAt
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID with ownership scoping
    ///
    /// Returns `None` both when the id does not exist and when it belongs
    /// to a different user.
    pub async fn find_by_id_for_user(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, status, createdAt, updatedAt
            FROM tasks
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists a user's tasks, newest first
    ///
    /// Creation timestamps can collide even at millisecond granularity, so
    /// the id tiebreak keeps the order stable across calls.
    pub async fn list_for_user(
        pool: &SqlitePool,
        user_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, title, description, status, createdAt, updatedAt
            FROM tasks
            WHERE user_id = ?
            ORDER BY createdAt DESC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Updates a task's title, description, and status
    ///
    /// Returns `false` when no row matched — the id may not exist or may
    /// belong to another user, and callers must not distinguish the two.
    /// `updatedAt` is refreshed on every matched update.
    pub async fn update_for_user(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
        data: UpdateTask,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?,
                description = ?,
                status = ?,
                updatedAt = (strftime('%Y-%m-%d %H:%M:%f', 'now'))
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.status.as_str())
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes a task
    ///
    /// Same zero-rows ambiguity policy as [`Task::update_for_user`].
    pub async fn delete_for_user(
        pool: &SqlitePool,
        id: i64,
        user_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts all tasks, owned and legacy alike
    ///
    /// Drives the seed-once check at startup.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_as_str() {
        assert_eq!(TaskStatus::Pending.as_str(), "pending");
        assert_eq!(TaskStatus::InProgress.as_str(), "in-progress");
        assert_eq!(TaskStatus::Completed.as_str(), "completed");
    }

    #[test]
    fn test_task_status_parse_round_trip() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_task_status_parse_rejects_unknown() {
        assert_eq!(TaskStatus::parse("done"), None);
        assert_eq!(TaskStatus::parse("Pending"), None);
        assert_eq!(TaskStatus::parse(""), None);
        assert_eq!(TaskStatus::parse("in progress"), None);
    }

    #[test]
    fn test_task_status_default_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn test_task_serializes_to_wire_shape() {
        let task = Task {
            id: 7,
            user_id: Some(1),
            title: "Write docs".to_string(),
            description: String::new(),
            status: "pending".to_string(),
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("user_id").is_some());
        assert!(json.get("created_at").is_none());
    }
}
