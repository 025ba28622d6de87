//! Data Transfer Objects (DTOs) for HTTP API contract.
//!
//! Request bodies are decoded into these types and converted into domain
//! types before reaching the core. Responses serialize domain types
//! directly.

pub mod tasks;

pub use tasks::{CreateTaskRequest, ListTasksQuery, UpdateTaskRequest};
