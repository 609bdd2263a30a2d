//! RemoveItem action

use crate::cart::traits::CartApplier;
use shared::order::CartDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveItemAction {
    pub product_id: i64,
}

impl RemoveItemAction {
    pub fn new(product_id: i64) -> Self {
        Self { product_id }
    }
}

impl CartApplier for RemoveItemAction {
    fn apply(&self, draft: &mut CartDraft) {
        // Missing id is a no-op
        draft.items.retain(|i| i.product_id != self.product_id);
    }
}
