//! Repository implementations using `SQLite`.
//!
//! These implementations encapsulate all SQL queries and database access.
//! The `SqlitePool` is confined to this module and never exposed through
//! the port trait signatures.

mod row_mappers;
mod sqlite_task_repository;

pub use sqlite_task_repository::SqliteTaskRepository;

pub(crate) use sqlite_task_repository::queries as task_queries;
