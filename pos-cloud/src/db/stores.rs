use shared::tenant::{ExpiredStore, StoreStatus};
use sqlx::{PgConnection, PgPool};

/// Active stores whose subscription ended before `now`
pub async fn find_expired_active(pool: &PgPool, now: i64) -> Result<Vec<ExpiredStore>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, name, subscription_expired_at
         FROM stores
         WHERE status = $1 AND subscription_expired_at < $2
         ORDER BY subscription_expired_at ASC",
    )
    .bind(StoreStatus::Active.as_str())
    .bind(now)
    .fetch_all(pool)
    .await
}

/// Move a store from `from` to `to`
///
/// Guarded by the current status, so re-applying is a no-op.
/// Returns the number of rows changed (0 or 1).
pub async fn transition_status(
    conn: &mut PgConnection,
    store_id: &str,
    from: StoreStatus,
    to: StoreStatus,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE stores SET status = $1 WHERE id = $2 AND status = $3")
        .bind(to.as_str())
        .bind(store_id)
        .bind(from.as_str())
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
