//! Clear action

use crate::cart::traits::CartApplier;
use shared::order::CartDraft;

/// Reset to the empty draft (customer, discount, tax and note included)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearAction;

impl CartApplier for ClearAction {
    fn apply(&self, draft: &mut CartDraft) {
        *draft = CartDraft::default();
    }
}
