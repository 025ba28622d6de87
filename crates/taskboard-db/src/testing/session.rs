//! Transactional sessions against the ephemeral store.

use anyhow::Result;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use taskboard_core::{NewTask, Task, TaskFilter};

use crate::repositories::task_queries;

/// Opens [`Session`]s bound to one pool.
#[derive(Clone)]
pub struct SessionFactory {
    pool: SqlitePool,
}

impl SessionFactory {
    /// Bind a factory to a pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Begin a new session.
    ///
    /// With the single-connection ephemeral store, only one session (or
    /// request) can hold the connection at a time: commit or close a
    /// session before issuing requests that touch the database.
    pub async fn open(&self) -> Result<Session> {
        Ok(Session {
            tx: self.pool.begin().await?,
        })
    }
}

/// A transaction with explicit commit.
///
/// Writes become visible to other sessions only after [`Session::commit`].
/// [`Session::close`] or dropping the session rolls back.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Raw connection for ad-hoc queries inside this transaction.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commit and release the connection.
    pub async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discard uncommitted work and release the connection.
    pub async fn close(self) -> Result<()> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Insert a task row directly, bypassing validation.
    pub async fn insert_task(&mut self, task: &NewTask) -> Result<Task> {
        Ok(task_queries::insert(&mut *self.tx, task).await?)
    }

    /// All tasks visible to this session, ordered by ID.
    pub async fn list_tasks(&mut self) -> Result<Vec<Task>> {
        Ok(task_queries::list(&mut *self.tx, TaskFilter::all()).await?)
    }

    /// Number of task rows visible to this session.
    pub async fn count_tasks(&mut self) -> Result<i64> {
        Ok(task_queries::count(&mut *self.tx, TaskFilter::all()).await?)
    }

    /// Delete every task row. Returns the number of rows removed.
    pub async fn delete_all_tasks(&mut self) -> Result<u64> {
        Ok(task_queries::delete_all(&mut *self.tx).await?)
    }
}
