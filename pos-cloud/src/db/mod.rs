//! Database access layer
//!
//! Expected tables (owned by the platform schema, not created here):
//!
//! | Table | Columns used |
//! |-------|--------------|
//! | `stores` | `id TEXT`, `name TEXT`, `status TEXT`, `subscription_expired_at BIGINT` |
//! | `subscriptions` | `store_id TEXT`, `status TEXT`, `end_date BIGINT` |
//! | `audit_logs` | `store_id TEXT`, `action TEXT`, `entity_type TEXT`, `entity_id TEXT`, `detail JSONB`, `created_at BIGINT` |
//!
//! Timestamps are Unix millis.

pub mod audit;
pub mod stores;
pub mod subscriptions;
