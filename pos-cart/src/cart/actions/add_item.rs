//! AddItem action
//!
//! Adds a product to the draft, merging into the existing line when the
//! product is already present.

use crate::cart::money::{self, normalize_quantity, sanitize_price, to_decimal};
use crate::cart::traits::CartApplier;
use shared::models::Product;
use shared::order::{CartDraft, CartItem};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct AddItemAction {
    pub product: Product,
    pub quantity: f64,
}

impl AddItemAction {
    pub fn new(product: Product, quantity: f64) -> Self {
        Self { product, quantity }
    }

    /// Add a single unit
    pub fn one(product: Product) -> Self {
        Self::new(product, 1.0)
    }
}

impl CartApplier for AddItemAction {
    fn apply(&self, draft: &mut CartDraft) {
        // Never decreases an existing quantity
        let Some(quantity) = normalize_quantity(self.quantity) else {
            debug!(
                product_id = self.product.id,
                quantity = self.quantity,
                "[Cart] Ignoring add with non-positive quantity"
            );
            return;
        };

        if let Some(existing) = draft
            .items
            .iter_mut()
            .find(|i| i.product_id == self.product.id)
        {
            existing.quantity =
                money::round_quantity(money::cap_quantity(to_decimal(existing.quantity) + quantity));
        } else {
            let unit_price = sanitize_price(self.product.price);
            draft.items.push(CartItem::from_product(
                &self.product,
                unit_price,
                money::round_quantity(quantity),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Product {
        Product::new(1, "Tea", 12.0)
    }

    #[test]
    fn test_add_new_item() {
        let mut draft = CartDraft::default();
        AddItemAction::one(tea()).apply(&mut draft);

        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].product_id, 1);
        assert_eq!(draft.items[0].name, "Tea");
        assert_eq!(draft.items[0].unit_price, 12.0);
        assert_eq!(draft.items[0].quantity, 1.0);
    }

    #[test]
    fn test_add_same_product_merges() {
        let mut draft = CartDraft::default();
        AddItemAction::new(tea(), 2.0).apply(&mut draft);
        AddItemAction::new(tea(), 3.0).apply(&mut draft);

        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 5.0);
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut draft = CartDraft::default();
        AddItemAction::one(Product::new(3, "C", 1.0)).apply(&mut draft);
        AddItemAction::one(Product::new(1, "A", 1.0)).apply(&mut draft);
        AddItemAction::one(Product::new(3, "C", 1.0)).apply(&mut draft);

        let ids: Vec<i64> = draft.items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_fractional_increments_sum_exactly() {
        let mut draft = CartDraft::default();
        for _ in 0..10 {
            AddItemAction::new(tea(), 0.1).apply(&mut draft);
        }
        assert_eq!(draft.items[0].quantity, 1.0);
    }

    #[test]
    fn test_quantity_rounded_to_three_decimals() {
        let mut draft = CartDraft::default();
        AddItemAction::new(tea(), 0.3334).apply(&mut draft);
        AddItemAction::new(tea(), 0.3334).apply(&mut draft);
        assert_eq!(draft.items[0].quantity, 0.666);
    }

    #[test]
    fn test_non_positive_quantity_is_ignored() {
        let mut draft = CartDraft::default();
        AddItemAction::new(tea(), 2.0).apply(&mut draft);
        AddItemAction::new(tea(), -1.0).apply(&mut draft);
        AddItemAction::new(tea(), f64::NAN).apply(&mut draft);
        AddItemAction::new(Product::new(2, "Cake", 5.0), 0.0).apply(&mut draft);

        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].quantity, 2.0);
    }

    #[test]
    fn test_malformed_price_becomes_zero() {
        let mut draft = CartDraft::default();
        AddItemAction::one(Product::new(9, "Gift", f64::NAN)).apply(&mut draft);
        assert_eq!(draft.items[0].unit_price, 0.0);
    }

    #[test]
    fn test_oversized_input_is_clamped() {
        let mut draft = CartDraft::default();
        AddItemAction::new(Product::new(9, "Gold", 1e15), 1e15).apply(&mut draft);
        AddItemAction::new(Product::new(9, "Gold", 1e15), 1e15).apply(&mut draft);

        assert_eq!(draft.items[0].unit_price, money::MAX_PRICE);
        assert_eq!(draft.items[0].quantity, money::MAX_QUANTITY);
    }
}
