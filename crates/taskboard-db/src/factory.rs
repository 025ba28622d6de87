//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use taskboard_core::{AppCore, Repos};

use crate::repositories::SqliteTaskRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// This is the recommended way for adapters to obtain repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Arc::new(SqliteTaskRepository::new(pool)))
    }

    /// Build a complete `AppCore` instance from a pool.
    ///
    /// Equivalent to `AppCore::new(CoreFactory::build_repos(pool))`.
    pub fn build_app_core(pool: SqlitePool) -> AppCore {
        AppCore::new(Self::build_repos(pool))
    }
}
