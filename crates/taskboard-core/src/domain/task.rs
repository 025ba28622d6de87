//! Task domain types and validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length of a task title, in characters, after trimming.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a task description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTask {
    /// Create an open task with the given title and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate and normalize the task.
    ///
    /// The title is trimmed; a blank description is stored as `None`.
    pub fn normalized(self) -> Result<Self, TaskValidationError> {
        Ok(Self {
            title: normalize_title(&self.title)?,
            description: normalize_description(self.description)?,
            completed: self.completed,
        })
    }
}

/// Partial update for an existing task.
///
/// `None` leaves a field unchanged. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Returns true if the update changes nothing.
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }

    /// Apply this update to a task, validating changed fields.
    ///
    /// `updated_at` is left to the caller.
    pub fn apply_to(self, task: &mut Task) -> Result<(), TaskValidationError> {
        if let Some(title) = self.title {
            task.title = normalize_title(&title)?;
        }
        if let Some(description) = self.description {
            task.description = normalize_description(description)?;
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        Ok(())
    }
}

/// Filter for listing tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Only return tasks with this completion state.
    pub completed: Option<bool>,
}

impl TaskFilter {
    /// Match every task.
    pub const fn all() -> Self {
        Self { completed: None }
    }

    /// Match only tasks with the given completion state.
    pub const fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
        }
    }
}

/// Task validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskValidationError {
    #[error("Task title cannot be empty")]
    EmptyTitle,

    #[error("Task title must be at most 200 characters, got {0}")]
    TitleTooLong(usize),

    #[error("Task description must be at most 2000 characters, got {0}")]
    DescriptionTooLong(usize),
}

fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LEN {
        return Err(TaskValidationError::TitleTooLong(len));
    }
    Ok(title.to_string())
}

fn normalize_description(raw: Option<String>) -> Result<Option<String>, TaskValidationError> {
    match raw {
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => {
            let len = text.chars().count();
            if len > MAX_DESCRIPTION_LEN {
                return Err(TaskValidationError::DescriptionTooLong(len));
            }
            Ok(Some(text))
        }
        None => Ok(None),
    }
}
