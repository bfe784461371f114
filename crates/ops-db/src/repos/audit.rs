//! Task audit log repository.
//!
//! Append-only field-level change records. Rows are inserted in batches, one
//! transaction per batch, and read back in commit order.

use ops_core::entities::{AuditEntry, AuditRecord};
use ops_core::enums::TrackedField;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum};
use crate::service::OpsService;

/// Filter criteria for audit queries.
#[derive(Debug, Default)]
pub struct AuditFilter {
    pub task_id: Option<String>,
    pub field: Option<TrackedField>,
    pub actor_id: Option<String>,
    pub limit: Option<u32>,
}

impl OpsService {
    /// Append a batch of audit rows atomically.
    ///
    /// Either every row is written or none is. An empty batch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any INSERT fails; the batch is rolled back.
    pub async fn insert_audit_batch(&self, rows: &[AuditRecord]) -> Result<(), DatabaseError> {
        if rows.is_empty() {
            return Ok(());
        }

        let tx = self.db().conn().transaction().await?;
        for row in rows {
            let inserted = tx
                .execute(
                    "INSERT INTO task_audit (task_id, actor_id, field, old_value, new_value, created_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    libsql::params![
                        row.task_id.as_str(),
                        row.actor_id.as_deref(),
                        row.field.as_str(),
                        row.old_value.as_str(),
                        row.new_value.as_str(),
                        format_datetime(&row.created_at)
                    ],
                )
                .await;
            if let Err(error) = inserted {
                tx.rollback().await?;
                return Err(error.into());
            }
        }
        tx.commit().await?;

        tracing::debug!(rows = rows.len(), "audit batch inserted");
        Ok(())
    }

    /// Query audit rows, oldest first. Rows sharing a timestamp keep their
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn query_audit(&self, filter: &AuditFilter) -> Result<Vec<AuditEntry>, DatabaseError> {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref task_id) = filter.task_id {
            params.push(libsql::Value::Text(task_id.clone()));
            conditions.push(format!("task_id = ?{}", params.len()));
        }
        if let Some(field) = filter.field {
            params.push(libsql::Value::Text(field.as_str().to_string()));
            conditions.push(format!("field = ?{}", params.len()));
        }
        if let Some(ref actor_id) = filter.actor_id {
            params.push(libsql::Value::Text(actor_id.clone()));
            conditions.push(format!("actor_id = ?{}", params.len()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let limit = filter.limit.unwrap_or(1000);
        let sql = format!(
            "SELECT id, task_id, actor_id, field, old_value, new_value, created_at
             FROM task_audit {where_clause}
             ORDER BY created_at, id LIMIT {limit}"
        );

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next().await? {
            entries.push(AuditEntry {
                id: row.get::<i64>(0)?,
                record: AuditRecord {
                    task_id: row.get::<String>(1)?,
                    actor_id: get_opt_string(&row, 2)?,
                    field: parse_enum(&row.get::<String>(3)?)?,
                    old_value: row.get::<String>(4)?,
                    new_value: row.get::<String>(5)?,
                    created_at: parse_datetime(&row.get::<String>(6)?)?,
                },
            });
        }

        Ok(entries)
    }
}
