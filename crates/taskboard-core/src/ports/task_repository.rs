//! Task repository trait definition.
//!
//! This port defines the interface for task persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewTask, Task, TaskFilter};

/// Repository for task persistence operations.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - CRUD-only: list, get, insert, update, delete
/// - Validation belongs in `TaskService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List tasks matching the filter, ordered by ID.
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, RepositoryError>;

    /// Get a task by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the task doesn't exist.
    async fn get(&self, id: i64) -> Result<Task, RepositoryError>;

    /// Insert a new task.
    ///
    /// Returns the persisted task with its assigned ID and timestamps.
    async fn insert(&self, task: &NewTask) -> Result<Task, RepositoryError>;

    /// Overwrite an existing task's mutable fields.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the task doesn't exist.
    async fn update(&self, task: &Task) -> Result<(), RepositoryError>;

    /// Delete a task by its database ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the task doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
