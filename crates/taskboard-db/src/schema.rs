//! Declarative schema for the taskboard database.
//!
//! Every table the application owns is listed in [`SCHEMA`]. Production
//! setup and the test harness both materialize it through
//! [`Schema::create_all`]; the harness removes it again with
//! [`Schema::drop_all`].

use anyhow::Result;
use sqlx::SqlitePool;

/// One table plus its indexes.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    /// Table name as used in SQL.
    pub name: &'static str,
    /// `CREATE TABLE IF NOT EXISTS` statement.
    pub create: &'static str,
    /// `CREATE INDEX IF NOT EXISTS` statements, run after the table.
    pub indexes: &'static [&'static str],
}

/// An ordered set of tables.
///
/// Tables are created in declaration order and dropped in reverse, so a
/// table must be declared after anything it references.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    tables: &'static [TableDef],
}

/// The `tasks` table.
pub const TASKS_TABLE: TableDef = TableDef {
    name: "tasks",
    create: r"
        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL CHECK (length(trim(title)) > 0),
            description TEXT,
            completed INTEGER NOT NULL DEFAULT 0 CHECK (completed IN (0, 1)),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
    ",
    indexes: &["CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed)"],
};

/// Every table owned by taskboard.
pub const SCHEMA: Schema = Schema::new(&[TASKS_TABLE]);

impl Schema {
    /// Declare a schema from an ordered table list.
    pub const fn new(tables: &'static [TableDef]) -> Self {
        Self { tables }
    }

    /// Names of the declared tables, in creation order.
    pub fn table_names(&self) -> impl Iterator<Item = &'static str> {
        self.tables.iter().map(|t| t.name)
    }

    /// Create every declared table and index.
    ///
    /// Safe to call repeatedly; all statements use `IF NOT EXISTS`.
    /// Runs in a single transaction.
    pub async fn create_all(&self, pool: &SqlitePool) -> Result<()> {
        let mut tx = pool.begin().await?;
        for table in self.tables {
            sqlx::query(table.create).execute(&mut *tx).await?;
            for index in table.indexes {
                sqlx::query(index).execute(&mut *tx).await?;
            }
        }
        tx.commit().await?;

        tracing::debug!(tables = self.tables.len(), "Schema created");
        Ok(())
    }

    /// Drop every declared table (and with it, its indexes).
    ///
    /// Tables are dropped in reverse declaration order.
    pub async fn drop_all(&self, pool: &SqlitePool) -> Result<()> {
        let mut tx = pool.begin().await?;
        for table in self.tables.iter().rev() {
            sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name))
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;

        tracing::debug!(tables = self.tables.len(), "Schema dropped");
        Ok(())
    }

    /// Returns the declared tables that are missing from the database.
    pub async fn missing_tables(&self, pool: &SqlitePool) -> Result<Vec<&'static str>> {
        let mut missing = Vec::new();
        for name in self.table_names() {
            let (exists,): (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
            )
            .bind(name)
            .fetch_one(pool)
            .await?;
            if exists == 0 {
                missing.push(name);
            }
        }
        Ok(missing)
    }
}
