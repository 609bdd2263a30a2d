//! CartEngine - owns the draft of one POS session
//!
//! Every transition goes through `dispatch`, which applies the action and
//! then writes a full snapshot to the `DraftStore`. Snapshot failures are
//! logged and swallowed; the draft keeps living in memory.

use shared::models::{CustomerRef, Product};
use shared::order::{CartDraft, CartItem, CartTotals, OrderCreated, OrderLine, OrderPayload};
use tracing::{debug, error, info, warn};

use super::actions::{
    AddItemAction, CartAction, ClearAction, RemoveItemAction, SetCustomerAction,
    SetDiscountAction, SetNoteAction, SetTaxRateAction, UpdateQuantityAction,
};
use super::error::{CartError, CartResult};
use super::gateway::OrderGateway;
use super::money;
use super::storage::DraftStore;
use super::traits::CartApplier;
use crate::config::CartConfig;

pub struct CartEngine<S: DraftStore> {
    store: S,
    session_key: String,
    draft: CartDraft,
    money_places: u32,
}

impl<S: DraftStore> CartEngine<S> {
    /// Open a session: rehydrate the persisted draft or start empty
    ///
    /// An unreadable snapshot is logged and replaced by an empty draft.
    /// A readable one is normalised before use.
    pub fn open(store: S, session_key: impl Into<String>, config: &CartConfig) -> Self {
        let session_key = session_key.into();
        let draft = match store.load(&session_key) {
            Ok(Some(stored)) => {
                let draft = normalize_snapshot(stored.clone());
                if draft != stored {
                    warn!(session = %session_key, "Cart draft snapshot needed normalisation");
                }
                info!(
                    session = %session_key,
                    items = draft.items.len(),
                    "Rehydrated cart draft"
                );
                draft
            }
            Ok(None) => CartDraft::default(),
            Err(e) => {
                error!(session = %session_key, error = %e, "Failed to load cart draft, starting empty");
                CartDraft::default()
            }
        };

        Self {
            store,
            session_key,
            draft,
            money_places: config.currency_decimals,
        }
    }

    pub fn draft(&self) -> &CartDraft {
        &self.draft
    }

    pub fn session_key(&self) -> &str {
        &self.session_key
    }

    /// Apply one action and snapshot the result
    pub fn dispatch(&mut self, action: impl Into<CartAction>) -> &CartDraft {
        let action = action.into();
        debug!(session = %self.session_key, action = action.name(), "[Cart] dispatch");
        action.apply(&mut self.draft);
        self.persist();
        &self.draft
    }

    pub fn add_item(&mut self, product: Product, quantity: f64) -> &CartDraft {
        self.dispatch(AddItemAction::new(product, quantity))
    }

    pub fn remove_item(&mut self, product_id: i64) -> &CartDraft {
        self.dispatch(RemoveItemAction::new(product_id))
    }

    pub fn update_quantity(&mut self, product_id: i64, quantity: f64) -> &CartDraft {
        self.dispatch(UpdateQuantityAction::new(product_id, quantity))
    }

    pub fn set_customer(&mut self, customer: Option<CustomerRef>) -> &CartDraft {
        self.dispatch(SetCustomerAction::new(customer))
    }

    pub fn set_discount(&mut self, amount: f64) -> &CartDraft {
        self.dispatch(SetDiscountAction::new(amount))
    }

    pub fn set_tax_rate(&mut self, percent: f64) -> &CartDraft {
        self.dispatch(SetTaxRateAction::new(percent))
    }

    pub fn set_note(&mut self, note: impl Into<String>) -> &CartDraft {
        self.dispatch(SetNoteAction::new(note))
    }

    pub fn clear(&mut self) -> &CartDraft {
        self.dispatch(ClearAction)
    }

    /// Recompute totals from the current draft
    pub fn totals(&self) -> CartTotals {
        money::calculate_totals(&self.draft, self.money_places)
    }

    /// Request body for the order-creation endpoint
    pub fn order_payload(&self) -> OrderPayload {
        OrderPayload {
            items: self
                .draft
                .items
                .iter()
                .map(|item| OrderLine {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price: item.unit_price,
                })
                .collect(),
            customer_id: self.draft.customer.as_ref().map(|c| c.id),
            discount: self.draft.discount,
            tax_rate: self.draft.tax_rate,
            note: self.draft.note.clone(),
            total_amount: self.totals().total_amount,
        }
    }

    /// Submit the draft as an order
    ///
    /// The draft is cleared only after the gateway confirms creation.
    pub async fn submit<G>(&mut self, gateway: &G) -> CartResult<OrderCreated>
    where
        G: OrderGateway + ?Sized,
    {
        if self.draft.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let payload = self.order_payload();
        match gateway.create_order(&payload).await {
            Ok(created) => {
                info!(
                    session = %self.session_key,
                    order_id = %created.id,
                    total = payload.total_amount,
                    "Order submitted"
                );
                self.clear();
                Ok(created)
            }
            Err(e) => {
                warn!(session = %self.session_key, error = %e, "Order submission failed, draft kept");
                Err(e)
            }
        }
    }

    /// End the session and drop its persisted snapshot
    pub fn close(self) {
        if let Err(e) = self.store.remove(&self.session_key) {
            error!(session = %self.session_key, error = %e, "Failed to remove cart draft snapshot");
        }
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.session_key, &self.draft) {
            error!(session = %self.session_key, error = %e, "Failed to persist cart draft");
        }
    }
}

/// Re-establish draft invariants on a loaded snapshot
///
/// One line per product (first position wins, quantities summed), only
/// positive quantities, sanitised prices and amounts.
fn normalize_snapshot(mut draft: CartDraft) -> CartDraft {
    let mut items: Vec<CartItem> = Vec::with_capacity(draft.items.len());
    for mut item in std::mem::take(&mut draft.items) {
        let Some(quantity) = money::normalize_quantity(item.quantity) else {
            continue;
        };
        match items.iter_mut().find(|i| i.product_id == item.product_id) {
            Some(existing) => {
                let merged = money::to_decimal(existing.quantity) + quantity;
                existing.quantity = money::round_quantity(money::cap_quantity(merged));
            }
            None => {
                item.quantity = money::round_quantity(quantity);
                item.unit_price = money::sanitize_price(item.unit_price);
                items.push(item);
            }
        }
    }
    draft.items = items;
    draft.discount = money::sanitize_amount(draft.discount);
    draft.tax_rate = money::sanitize_percent(draft.tax_rate);
    draft
}
