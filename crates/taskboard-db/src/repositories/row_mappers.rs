//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use taskboard_core::{RepositoryError, Task};

/// Shared SELECT column list for task queries.
pub const TASK_SELECT_COLUMNS: &str = "id, title, description, completed, created_at, updated_at";

/// Format a timestamp the way it is stored.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339()
}

/// Parse a stored RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Storage(format!("Invalid timestamp '{raw}': {e}")))
}

/// Map a sqlx error onto the repository error taxonomy.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_check_violation() => {
            RepositoryError::Constraint(db.message().to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// Parse a database row into a Task.
pub fn row_to_task(row: &SqliteRow) -> Result<Task, RepositoryError> {
    let created_at: String = row.try_get("created_at").map_err(map_sqlx_error)?;
    let updated_at: String = row.try_get("updated_at").map_err(map_sqlx_error)?;

    Ok(Task {
        id: row.try_get("id").map_err(map_sqlx_error)?,
        title: row.try_get("title").map_err(map_sqlx_error)?,
        description: row.try_get("description").map_err(map_sqlx_error)?,
        completed: row.try_get("completed").map_err(map_sqlx_error)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
