//! Task service - orchestrates task operations.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{NewTask, Task, TaskFilter, TaskUpdate};
use crate::ports::{CoreError, TaskRepository};

/// Service for task operations.
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    /// Create a new task service.
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    /// List tasks matching the filter.
    pub async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, CoreError> {
        self.repo.list(filter).await.map_err(CoreError::from)
    }

    /// Get a single task.
    pub async fn get(&self, id: i64) -> Result<Task, CoreError> {
        self.repo.get(id).await.map_err(CoreError::from)
    }

    /// Validate and persist a new task.
    pub async fn create(&self, task: NewTask) -> Result<Task, CoreError> {
        let task = task.normalized()?;
        let created = self.repo.insert(&task).await?;
        tracing::debug!(task_id = created.id, "Created task");
        Ok(created)
    }

    /// Apply a partial update to a task.
    ///
    /// An empty update returns the task unchanged without writing.
    pub async fn update(&self, id: i64, update: TaskUpdate) -> Result<Task, CoreError> {
        let mut task = self.repo.get(id).await?;
        if update.is_empty() {
            return Ok(task);
        }

        update.apply_to(&mut task)?;
        task.updated_at = Utc::now();
        self.repo.update(&task).await?;
        tracing::debug!(task_id = id, "Updated task");
        Ok(task)
    }

    /// Delete a task.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await?;
        tracing::debug!(task_id = id, "Deleted task");
        Ok(())
    }
}
