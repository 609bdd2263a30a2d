//! Cart action implementations
//!
//! Each action implements the `CartApplier` trait and handles
//! one specific operation. Actions are PURE functions of the draft.

use enum_dispatch::enum_dispatch;
use shared::order::CartDraft;

use super::traits::CartApplier;

mod add_item;
mod clear;
mod draft_fields;
mod remove_item;
mod update_quantity;

pub use add_item::AddItemAction;
pub use clear::ClearAction;
pub use draft_fields::{SetCustomerAction, SetDiscountAction, SetNoteAction, SetTaxRateAction};
pub use remove_item::RemoveItemAction;
pub use update_quantity::UpdateQuantityAction;

/// CartAction enum - dispatches to concrete action implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(CartApplier)]
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(AddItemAction),
    RemoveItem(RemoveItemAction),
    UpdateQuantity(UpdateQuantityAction),
    SetCustomer(SetCustomerAction),
    SetDiscount(SetDiscountAction),
    SetTaxRate(SetTaxRateAction),
    SetNote(SetNoteAction),
    Clear(ClearAction),
}

impl CartAction {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddItem(_) => "add_item",
            CartAction::RemoveItem(_) => "remove_item",
            CartAction::UpdateQuantity(_) => "update_quantity",
            CartAction::SetCustomer(_) => "set_customer",
            CartAction::SetDiscount(_) => "set_discount",
            CartAction::SetTaxRate(_) => "set_tax_rate",
            CartAction::SetNote(_) => "set_note",
            CartAction::Clear(_) => "clear",
        }
    }
}

/// Pure reducer: `(state, action) -> new state`
pub fn reduce(draft: &CartDraft, action: impl Into<CartAction>) -> CartDraft {
    let mut next = draft.clone();
    action.into().apply(&mut next);
    next
}
