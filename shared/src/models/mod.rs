//! Catalog-side models referenced by the cart
//!
//! The cart only keeps snapshots of these; it never owns the records.

pub mod customer;
pub mod product;

// Re-exports
pub use customer::*;
pub use product::*;
