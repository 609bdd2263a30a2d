//! Cart draft engine
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `traits` | `CartApplier`: one pure state transition |
//! | `actions` | `CartAction` enum + one applier per operation |
//! | `money` | Decimal rounding and totals derivation |
//! | `storage` | `DraftStore` + redb implementation |
//! | `engine` | `CartEngine`: owns one session's draft |
//! | `gateway` | Order submission (`OrderGateway`, reqwest) |

// `traits` must come before `actions` for enum_dispatch registration
mod traits;

pub mod actions;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod money;
pub mod storage;

pub use actions::{CartAction, reduce};
pub use engine::CartEngine;
pub use error::{CartError, CartResult};
pub use gateway::{HttpOrderGateway, OrderGateway};
pub use storage::{DraftStore, RedbDraftStore, StorageError, StorageResult};
pub use traits::CartApplier;
