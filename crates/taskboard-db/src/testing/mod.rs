//! Isolated database fixtures for tests.
//!
//! A [`TestHarness`] owns one run: it provisions an [`EphemeralStore`],
//! materializes the schema once, resets task rows before every case and
//! drops the schema exactly once at the end. Tests reach the store through
//! [`SessionFactory`] sessions or hand [`TestHarness::pool`] to the
//! application they want to exercise.
//!
//! ```ignore
//! let harness = TestHarness::start().await?;
//!
//! harness
//!     .run_case(|h| async move {
//!         let mut session = h.sessions().open().await?;
//!         session.insert_task(&NewTask::new("first")).await?;
//!         session.commit().await?;
//!         Ok(())
//!     })
//!     .await?;
//!
//! harness.finish().await?;
//! ```

mod harness;
mod session;
mod store;

pub use harness::TestHarness;
pub use session::{Session, SessionFactory};
pub use store::EphemeralStore;
