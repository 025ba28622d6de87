//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).

mod task;

pub use task::{
    MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, NewTask, Task, TaskFilter, TaskUpdate,
    TaskValidationError,
};
