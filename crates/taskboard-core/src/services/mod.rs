//! Core services.
//!
//! Services are thin orchestrators over the ports. They own validation
//! and any rule that doesn't belong in a repository.

mod app_core;
mod task_service;

pub use app_core::AppCore;
pub use task_service::TaskService;
