//! Order draft types
//!
//! - `CartDraft`: the in-progress order owned by one POS session
//! - `CartTotals`: derived amounts, recomputed on every read
//! - `OrderPayload`: request body for the order-creation endpoint

pub mod draft;
pub mod payload;

pub use draft::{CartDraft, CartItem, CartTotals};
pub use payload::{OrderCreated, OrderLine, OrderPayload};
