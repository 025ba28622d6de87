//! Temporary file-backed `SQLite` store.

use std::path::Path;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempPath;

/// A uniquely named `SQLite` file in the OS temp directory plus a pool
/// holding exactly one connection to it.
///
/// Every session and every request handler share that one connection, so
/// they all observe the same committed state. The file is removed by
/// [`EphemeralStore::close`], or when the store is dropped.
pub struct EphemeralStore {
    pool: SqlitePool,
    path: TempPath,
}

impl EphemeralStore {
    /// Reserve a temp file and open the single-connection pool.
    pub async fn provision() -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("taskboard-")
            .suffix(".db")
            .tempfile()?
            .into_temp_path();

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true)
                    .foreign_keys(true),
            )
            .await?;

        tracing::debug!(path = %path.display(), "Provisioned ephemeral store");
        Ok(Self { pool, path })
    }

    /// The shared pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Close the pool and delete the backing file.
    pub async fn close(self) -> Result<()> {
        self.pool.close().await;
        tracing::debug!(path = %self.path.display(), "Removing ephemeral store");
        self.path.close()?;
        Ok(())
    }
}
