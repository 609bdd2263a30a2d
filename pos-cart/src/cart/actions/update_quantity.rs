//! UpdateQuantity action
//!
//! Overwrites a line quantity. Anything that is not a positive number
//! removes the line instead.

use super::RemoveItemAction;
use crate::cart::money::{self, normalize_quantity};
use crate::cart::traits::CartApplier;
use shared::order::CartDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQuantityAction {
    pub product_id: i64,
    pub quantity: f64,
}

impl UpdateQuantityAction {
    pub fn new(product_id: i64, quantity: f64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

impl CartApplier for UpdateQuantityAction {
    fn apply(&self, draft: &mut CartDraft) {
        match normalize_quantity(self.quantity) {
            Some(quantity) => {
                if let Some(item) = draft
                    .items
                    .iter_mut()
                    .find(|i| i.product_id == self.product_id)
                {
                    item.quantity = money::round_quantity(quantity);
                }
            }
            None => RemoveItemAction::new(self.product_id).apply(draft),
        }
    }
}
