//! Audit entry vocabulary for tenant state transitions

use serde::{Deserialize, Serialize};

use super::store::{ExpiredStore, StoreStatus};

/// Audited action kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    SubscriptionExpired,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::SubscriptionExpired => "subscription_expired",
        }
    }
}

/// Audited entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEntityType {
    Store,
}

impl AuditEntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditEntityType::Store => "store",
        }
    }
}

/// Pre-transition snapshot stored in the audit `detail` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryAuditDetail {
    pub store_name: String,
    pub previous_status: StoreStatus,
    pub subscription_expired_at: i64,
    pub subscriptions_expired: u64,
}

impl ExpiryAuditDetail {
    pub fn new(store: &ExpiredStore, subscriptions_expired: u64) -> Self {
        Self {
            store_name: store.name.clone(),
            previous_status: StoreStatus::Active,
            subscription_expired_at: store.subscription_expired_at,
            subscriptions_expired,
        }
    }
}
