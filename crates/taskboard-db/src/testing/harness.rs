//! Run-scoped fixture harness.

use std::future::Future;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::session::SessionFactory;
use super::store::EphemeralStore;
use crate::schema::{SCHEMA, Schema};

/// One isolated test run.
///
/// `start` provisions a fresh ephemeral store and creates the schema once.
/// Each case run through [`TestHarness::run_case`] starts with an empty
/// `tasks` table. The schema is dropped exactly once, either through
/// [`TestHarness::drop_schema`] or by [`TestHarness::finish`], which also
/// deletes the backing file.
pub struct TestHarness {
    store: EphemeralStore,
    sessions: SessionFactory,
    schema: Schema,
    schema_dropped: AtomicBool,
}

impl TestHarness {
    /// Provision a store and materialize the full schema.
    pub async fn start() -> Result<Self> {
        Self::start_with_schema(SCHEMA).await
    }

    /// Provision a store and materialize the given schema.
    pub async fn start_with_schema(schema: Schema) -> Result<Self> {
        let store = EphemeralStore::provision().await?;
        schema
            .create_all(store.pool())
            .await
            .context("failed to create test schema")?;

        let sessions = SessionFactory::new(store.pool().clone());
        tracing::debug!(path = %store.path().display(), "Test harness started");

        Ok(Self {
            store,
            sessions,
            schema,
            schema_dropped: AtomicBool::new(false),
        })
    }

    /// The store's pool, for wiring an application under test.
    pub const fn pool(&self) -> &SqlitePool {
        self.store.pool()
    }

    /// Session factory bound to the store.
    pub const fn sessions(&self) -> &SessionFactory {
        &self.sessions
    }

    /// Location of the backing database file.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Whether the schema has been dropped.
    pub fn is_schema_dropped(&self) -> bool {
        self.schema_dropped.load(Ordering::SeqCst)
    }

    /// Delete every task row in its own committed session.
    ///
    /// Idempotent. Fails once the schema has been dropped.
    pub async fn reset_data(&self) -> Result<()> {
        let mut session = self.sessions.open().await?;
        let removed = session
            .delete_all_tasks()
            .await
            .context("failed to reset task rows")?;
        session.commit().await?;

        tracing::debug!(removed, "Reset task rows");
        Ok(())
    }

    /// Run one test case against a freshly reset store.
    pub async fn run_case<'a, F, Fut, T>(&'a self, case: F) -> Result<T>
    where
        F: FnOnce(&'a Self) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.reset_data().await?;
        case(self).await
    }

    /// Drop every declared table.
    ///
    /// Returns `Ok(true)` the first time and `Ok(false)` afterwards, so the
    /// schema is torn down exactly once per run.
    pub async fn drop_schema(&self) -> Result<bool> {
        if self.is_schema_dropped() {
            return Ok(false);
        }
        self.schema
            .drop_all(self.store.pool())
            .await
            .context("failed to drop test schema")?;
        self.schema_dropped.store(true, Ordering::SeqCst);
        Ok(true)
    }

    /// End the run: drop the schema if still present, close the pool and
    /// delete the backing file.
    pub async fn finish(self) -> Result<()> {
        self.drop_schema().await?;
        self.store.close().await
    }
}
