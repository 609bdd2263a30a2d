//! Cart error types
//!
//! Draft transitions never fail; only submission does.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    /// Submission attempted with no line items
    #[error("Cart is empty")]
    EmptyCart,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Order endpoint answered with a non-success status
    #[error("Order rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Unexpected response body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type CartResult<T> = Result<T, CartError>;
