//! Product Model

use serde::{Deserialize, Serialize};

/// Product as offered to the cart by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in currency units
    pub price: f64,
    pub sku: Option<String>,
    /// Sale unit label (e.g. "kg" for weighed goods)
    pub unit: Option<String>,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            sku: None,
            unit: None,
        }
    }
}
