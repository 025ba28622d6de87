//! Core domain types, ports and services for taskboard.
//!
//! This crate has no knowledge of `SQLite` or HTTP. Storage adapters
//! implement the traits in [`ports`]; web adapters call into [`services`].

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, NewTask, Task, TaskFilter, TaskUpdate,
    TaskValidationError,
};
pub use ports::{CoreError, Repos, RepositoryError, TaskRepository};
pub use services::{AppCore, TaskService};

// Re-export path utilities
pub use paths::{PathError, data_root, database_path};
