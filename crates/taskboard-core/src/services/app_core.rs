//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance and use it to access all
//! functionality.

use crate::ports::Repos;

use super::TaskService;

/// The core application facade.
///
/// Constructed at the adapter's composition root with concrete repository
/// implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos);
///
/// let open = core.tasks().list(TaskFilter::completed(false)).await?;
/// ```
pub struct AppCore {
    tasks: TaskService,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories.
    pub fn new(repos: Repos) -> Self {
        Self {
            tasks: TaskService::new(repos.tasks),
        }
    }

    /// Task operations.
    pub const fn tasks(&self) -> &TaskService {
        &self.tasks
    }
}
