//! Draft field setters
//!
//! Direct replacement of customer, discount, tax rate and note. Numeric
//! input is normalised (fail-safe): NaN, infinities and negatives become 0.

use crate::cart::money::{sanitize_amount, sanitize_percent};
use crate::cart::traits::CartApplier;
use shared::models::CustomerRef;
use shared::order::CartDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct SetCustomerAction {
    pub customer: Option<CustomerRef>,
}

impl SetCustomerAction {
    pub fn new(customer: Option<CustomerRef>) -> Self {
        Self { customer }
    }
}

impl CartApplier for SetCustomerAction {
    fn apply(&self, draft: &mut CartDraft) {
        draft.customer = self.customer.clone();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetDiscountAction {
    pub amount: f64,
}

impl SetDiscountAction {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl CartApplier for SetDiscountAction {
    fn apply(&self, draft: &mut CartDraft) {
        draft.discount = sanitize_amount(self.amount);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetTaxRateAction {
    pub percent: f64,
}

impl SetTaxRateAction {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }
}

impl CartApplier for SetTaxRateAction {
    fn apply(&self, draft: &mut CartDraft) {
        draft.tax_rate = sanitize_percent(self.percent);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetNoteAction {
    pub note: String,
}

impl SetNoteAction {
    pub fn new(note: impl Into<String>) -> Self {
        Self { note: note.into() }
    }
}

impl CartApplier for SetNoteAction {
    fn apply(&self, draft: &mut CartDraft) {
        draft.note = self.note.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_unset_customer() {
        let mut draft = CartDraft::default();
        let customer = CustomerRef {
            id: 5,
            name: "Ana".to_string(),
            phone: None,
        };

        SetCustomerAction::new(Some(customer.clone())).apply(&mut draft);
        assert_eq!(draft.customer, Some(customer));

        SetCustomerAction::new(None).apply(&mut draft);
        assert_eq!(draft.customer, None);
    }

    #[test]
    fn test_discount_coerces_malformed_input() {
        let mut draft = CartDraft::default();
        SetDiscountAction::new(250.0).apply(&mut draft);
        assert_eq!(draft.discount, 250.0);

        SetDiscountAction::new(f64::NAN).apply(&mut draft);
        assert_eq!(draft.discount, 0.0);

        SetDiscountAction::new(-10.0).apply(&mut draft);
        assert_eq!(draft.discount, 0.0);
    }

    #[test]
    fn test_tax_rate_coerces_and_clamps() {
        let mut draft = CartDraft::default();
        SetTaxRateAction::new(11.0).apply(&mut draft);
        assert_eq!(draft.tax_rate, 11.0);

        SetTaxRateAction::new(f64::INFINITY).apply(&mut draft);
        assert_eq!(draft.tax_rate, 0.0);

        SetTaxRateAction::new(250.0).apply(&mut draft);
        assert_eq!(draft.tax_rate, 100.0);
    }

    #[test]
    fn test_set_note() {
        let mut draft = CartDraft::default();
        SetNoteAction::new("table 4").apply(&mut draft);
        assert_eq!(draft.note, "table 4");
    }
}
