//! pos-cart: POS order draft engine
//!
//! Keeps the in-progress order of one POS session:
//! - Pure reducer over `CartAction` (add/remove/update/set/clear)
//! - Totals derived with `rust_decimal`, never stored
//! - Full snapshot to a local redb file after every transition
//! - Submission to the order-creation endpoint via `OrderGateway`

pub mod cart;
pub mod config;

pub use cart::{
    CartAction, CartEngine, CartError, DraftStore, HttpOrderGateway, OrderGateway, RedbDraftStore,
    StorageError, reduce,
};
pub use config::CartConfig;
