use shared::tenant::SubscriptionStatus;
use sqlx::PgConnection;

/// Mark a store's active subscription rows that ended before `now` as expired
///
/// Returns the number of rows changed.
pub async fn expire_elapsed(
    conn: &mut PgConnection,
    store_id: &str,
    now: i64,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE subscriptions SET status = $1
         WHERE store_id = $2 AND status = $3 AND end_date < $4",
    )
    .bind(SubscriptionStatus::Expired.as_str())
    .bind(store_id)
    .bind(SubscriptionStatus::Active.as_str())
    .bind(now)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}
