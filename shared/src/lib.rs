//! Shared types for the POS core
//!
//! Models used by both the cart engine (`pos-cart`) and the cloud
//! subscription sweeper (`pos-cloud`).

pub mod models;
pub mod order;
pub mod tenant;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
