//! # ops-db
//!
//! libSQL persistence for opsdesk.
//!
//! Handles all relational state: employees, tasks, and the append-only task
//! audit log. Implements the `ops-core` store traits so the commit pipeline
//! can write through a real database.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod store;
#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all opsdesk state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation.
pub struct OpsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl OpsDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let ops_db = Self { db, conn };
        ops_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(ops_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"tsk-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> OpsDb {
        OpsDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["employees", "tasks", "task_audit"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("tsk").await.unwrap();
        assert!(id.starts_with("tsk-"), "ID should start with 'tsk-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in ops_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn audit_rows_cannot_be_rewritten() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO task_audit (task_id, field, old_value, new_value, created_at)
                 VALUES ('tsk-1', 'status', 'pending', 'done', '2024-01-01T00:00:00.000000Z')",
                (),
            )
            .await
            .unwrap();

        let update = db
            .conn()
            .execute("UPDATE task_audit SET new_value = 'review'", ())
            .await;
        assert!(update.is_err(), "audit rows must not be updated");

        let delete = db.conn().execute("DELETE FROM task_audit", ()).await;
        assert!(delete.is_err(), "audit rows must not be deleted");
    }

    #[tokio::test]
    async fn file_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opsdesk.db");
        let path = path.to_str().unwrap();

        {
            let db = OpsDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO employees (employee_id, employee_name, email) VALUES ('emp-1', 'A', 'a@x.test')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = OpsDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT count(*) FROM employees", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
