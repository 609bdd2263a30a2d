//! Audit log operations

use shared::tenant::{AuditAction, AuditEntityType};
use sqlx::PgConnection;

/// Audit entry to append
pub struct NewAuditEntry<'a> {
    pub store_id: &'a str,
    pub action: AuditAction,
    pub entity_type: AuditEntityType,
    pub entity_id: &'a str,
    pub detail: &'a serde_json::Value,
    pub now: i64,
}

/// Write an audit log entry
pub async fn append(conn: &mut PgConnection, entry: &NewAuditEntry<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO audit_logs (store_id, action, entity_type, entity_id, detail, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(entry.store_id)
    .bind(entry.action.as_str())
    .bind(entry.entity_type.as_str())
    .bind(entry.entity_id)
    .bind(entry.detail)
    .bind(entry.now)
    .execute(conn)
    .await?;
    Ok(())
}
