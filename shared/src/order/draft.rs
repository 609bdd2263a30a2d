use serde::{Deserialize, Serialize};

use crate::models::{CustomerRef, Product};

/// Cart line item (one per product)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    /// Up to 3 fractional digits (weighed goods)
    pub quantity: f64,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl CartItem {
    /// Build a line from a product snapshot
    pub fn from_product(product: &Product, unit_price: f64, quantity: f64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price,
            quantity,
            sku: product.sku.clone(),
            unit: product.unit.clone(),
        }
    }
}

/// Order draft state
///
/// Totals are intentionally absent: they are derived from `items`,
/// `discount` and `tax_rate` on every read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartDraft {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub customer: Option<CustomerRef>,
    /// Amount subtracted from the subtotal before tax
    #[serde(default)]
    pub discount: f64,
    /// Percentage (0-100) applied to the discounted subtotal
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub note: String,
}

impl CartDraft {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Derived cart amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub sub_total: f64,
    /// Discount actually deducted (never more than `sub_total`)
    pub applied_discount: f64,
    pub tax_amount: f64,
    pub total_amount: f64,
}
