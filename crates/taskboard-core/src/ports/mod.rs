//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod task_repository;

use std::sync::Arc;
use thiserror::Error;

use crate::domain::TaskValidationError;

pub use task_repository::TaskRepository;

/// Container for all repository trait objects.
///
/// Adapters receive a `Repos` from the storage crate's factory and hand it
/// to `AppCore` without depending on concrete repository types.
#[derive(Clone)]
pub struct Repos {
    /// Task repository for CRUD operations on tasks.
    pub tasks: Arc<dyn TaskRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A CHECK constraint rejected the row.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Task validation failed.
    #[error(transparent)]
    Task(#[from] TaskValidationError),
}
