//! Persistence seam for the expiry sweep

use async_trait::async_trait;
use shared::tenant::{AuditAction, AuditEntityType, ExpiredStore, ExpiryAuditDetail, StoreStatus};
use sqlx::PgPool;

use super::error::BoxError;
use crate::db::{self, audit::NewAuditEntry};

/// Result of a single store transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Store moved `active -> expired` by this call
    Expired { subscriptions_expired: u64 },
    /// Store was no longer `active`; nothing written
    AlreadyTransitioned,
}

#[async_trait]
pub trait ExpiryRepository: Send + Sync {
    /// Active stores whose subscription ended before `now`
    async fn find_expired_stores(&self, now: i64) -> Result<Vec<ExpiredStore>, BoxError>;

    /// Expire one store, its elapsed subscriptions and write the audit entry
    ///
    /// All-or-nothing: on error nothing is committed. Re-applying to an
    /// already expired store returns `AlreadyTransitioned`.
    async fn expire_store(&self, store: &ExpiredStore, now: i64)
    -> Result<TransitionOutcome, BoxError>;
}

/// PostgreSQL implementation (one transaction per store)
#[derive(Clone)]
pub struct PgExpiryRepository {
    pool: PgPool,
}

impl PgExpiryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExpiryRepository for PgExpiryRepository {
    async fn find_expired_stores(&self, now: i64) -> Result<Vec<ExpiredStore>, BoxError> {
        Ok(db::stores::find_expired_active(&self.pool, now).await?)
    }

    async fn expire_store(
        &self,
        store: &ExpiredStore,
        now: i64,
    ) -> Result<TransitionOutcome, BoxError> {
        let mut tx = self.pool.begin().await?;

        let changed = db::stores::transition_status(
            &mut tx,
            &store.id,
            StoreStatus::Active,
            StoreStatus::Expired,
        )
        .await?;
        if changed == 0 {
            tx.rollback().await?;
            return Ok(TransitionOutcome::AlreadyTransitioned);
        }

        let subscriptions_expired = db::subscriptions::expire_elapsed(&mut tx, &store.id, now).await?;

        let detail = serde_json::to_value(ExpiryAuditDetail::new(store, subscriptions_expired))?;
        db::audit::append(
            &mut tx,
            &NewAuditEntry {
                store_id: &store.id,
                action: AuditAction::SubscriptionExpired,
                entity_type: AuditEntityType::Store,
                entity_id: &store.id,
                detail: &detail,
                now,
            },
        )
        .await?;

        tx.commit().await?;

        Ok(TransitionOutcome::Expired {
            subscriptions_expired,
        })
    }
}
