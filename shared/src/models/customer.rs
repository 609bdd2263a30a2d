//! Customer reference

use serde::{Deserialize, Serialize};

/// Snapshot of the customer attached to a draft (weak reference by id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
}
