//! Store (tenant) Model

use serde::{Deserialize, Serialize};

/// Store lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Active,
    Expired,
    Suspended,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Expired => "expired",
            StoreStatus::Suspended => "suspended",
        }
    }
}

/// Active store whose subscription has lapsed (sweep candidate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ExpiredStore {
    pub id: String,
    pub name: String,
    pub subscription_expired_at: i64,
}
