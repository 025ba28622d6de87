//! `SQLite` implementation of the `TaskRepository` trait.

use async_trait::async_trait;
use sqlx::SqlitePool;

use taskboard_core::{NewTask, RepositoryError, Task, TaskFilter, TaskRepository};

/// `SQLite` implementation of the `TaskRepository` trait.
///
/// Every call checks a connection out of the pool and runs in its own
/// implicit transaction.
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Create a new `SQLite` task repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, RepositoryError> {
        queries::list(&self.pool, filter).await
    }

    async fn get(&self, id: i64) -> Result<Task, RepositoryError> {
        queries::get(&self.pool, id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Task with ID {id}")))
    }

    async fn insert(&self, task: &NewTask) -> Result<Task, RepositoryError> {
        queries::insert(&self.pool, task).await
    }

    async fn update(&self, task: &Task) -> Result<(), RepositoryError> {
        let rows = queries::update(&self.pool, task).await?;
        if rows == 0 {
            return Err(RepositoryError::NotFound(format!("Task with ID {}", task.id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let rows = queries::delete(&self.pool, id).await?;
        if rows == 0 {
            return Err(RepositoryError::NotFound(format!("Task with ID {id}")));
        }
        Ok(())
    }
}

/// Task SQL, generic over the executor.
///
/// The repository runs these against the pool; test sessions run them
/// inside an open transaction.
pub mod queries {
    use chrono::Utc;
    use sqlx::SqliteExecutor;

    use taskboard_core::{NewTask, RepositoryError, Task, TaskFilter};

    use crate::repositories::row_mappers::{
        TASK_SELECT_COLUMNS, format_timestamp, map_sqlx_error, row_to_task,
    };

    pub async fn list<'e, E: SqliteExecutor<'e>>(
        executor: E,
        filter: TaskFilter,
    ) -> Result<Vec<Task>, RepositoryError> {
        let query = format!(
            "SELECT {TASK_SELECT_COLUMNS} FROM tasks WHERE (?1 IS NULL OR completed = ?1) ORDER BY id"
        );

        let rows = sqlx::query(&query)
            .bind(filter.completed)
            .fetch_all(executor)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(row_to_task).collect()
    }

    pub async fn get<'e, E: SqliteExecutor<'e>>(
        executor: E,
        id: i64,
    ) -> Result<Option<Task>, RepositoryError> {
        let query = format!("SELECT {TASK_SELECT_COLUMNS} FROM tasks WHERE id = ?");

        sqlx::query(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
            .map_err(map_sqlx_error)?
            .as_ref()
            .map(row_to_task)
            .transpose()
    }

    pub async fn insert<'e, E: SqliteExecutor<'e>>(
        executor: E,
        task: &NewTask,
    ) -> Result<Task, RepositoryError> {
        let now = format_timestamp(&Utc::now());
        let query = format!(
            "INSERT INTO tasks (title, description, completed, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {TASK_SELECT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.completed)
            .bind(&now)
            .bind(&now)
            .fetch_one(executor)
            .await
            .map_err(map_sqlx_error)?;

        row_to_task(&row)
    }

    /// Returns the number of rows changed (0 or 1).
    pub async fn update<'e, E: SqliteExecutor<'e>>(
        executor: E,
        task: &Task,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, completed = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.completed)
        .bind(format_timestamp(&task.updated_at))
        .bind(task.id)
        .execute(executor)
        .await
        .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete<'e, E: SqliteExecutor<'e>>(
        executor: E,
        id: i64,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    /// Remove every task. Returns the number of rows removed.
    #[cfg_attr(not(any(test, feature = "test-utils")), allow(dead_code))]
    pub async fn delete_all<'e, E: SqliteExecutor<'e>>(executor: E) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM tasks")
            .execute(executor)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    #[cfg_attr(not(any(test, feature = "test-utils")), allow(dead_code))]
    pub async fn count<'e, E: SqliteExecutor<'e>>(
        executor: E,
        filter: TaskFilter,
    ) -> Result<i64, RepositoryError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE (?1 IS NULL OR completed = ?1)")
                .bind(filter.completed)
                .fetch_one(executor)
                .await
                .map_err(map_sqlx_error)?;

        Ok(count)
    }
}
