//! Tenant subscription models
//!
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! Timestamps are Unix millis.

pub mod audit;
pub mod store;
pub mod subscription;

pub use audit::{AuditAction, AuditEntityType, ExpiryAuditDetail};
pub use store::{ExpiredStore, StoreStatus};
pub use subscription::SubscriptionStatus;
