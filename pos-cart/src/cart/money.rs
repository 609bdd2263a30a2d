//! Money and quantity arithmetic using rust_decimal
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Quantities are rounded to 3 places after
//! every transition so repeated small increments cannot drift.
//!
//! Inputs are clamped to `MAX_PRICE` / `MAX_QUANTITY` / `MAX_AMOUNT` so that
//! every product stays far below `Decimal::MAX` (~7.9e28).

use rust_decimal::prelude::*;
use shared::order::{CartDraft, CartTotals};

/// Fractional digits kept on quantities (weighed goods)
pub const QUANTITY_PLACES: u32 = 3;

/// Maximum unit price (in currency units)
pub const MAX_PRICE: f64 = 1_000_000_000_000.0;
/// Maximum quantity per line
pub const MAX_QUANTITY: f64 = 1_000_000.0;
/// Maximum discount amount
pub const MAX_AMOUNT: f64 = MAX_PRICE * MAX_QUANTITY;

/// Upper bound for a tax rate percentage
const MAX_TAX_RATE: f64 = 100.0;

/// Convert f64 to Decimal; unrepresentable input becomes zero
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::warn!(value = ?value, "Unrepresentable f64 in cart calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 (no rounding)
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Half-up rounding to `places` decimal digits
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a quantity to 3 decimals and return it as f64
pub fn round_quantity(value: Decimal) -> f64 {
    to_f64(round_half_up(value, QUANTITY_PLACES))
}

/// Cap an already-normalised quantity at `MAX_QUANTITY`
pub fn cap_quantity(value: Decimal) -> Decimal {
    value.min(to_decimal(MAX_QUANTITY))
}

/// Normalise a requested quantity
///
/// Returns `None` for NaN, infinities, non-positive values and values
/// that round to zero at 3 decimals. Oversized values are capped.
pub fn normalize_quantity(value: f64) -> Option<Decimal> {
    if !value.is_finite() || value <= 0.0 {
        return None;
    }
    let rounded = round_half_up(to_decimal(bounded(value, MAX_QUANTITY)), QUANTITY_PLACES);
    (rounded > Decimal::ZERO).then_some(rounded)
}

/// Unit price in [0, MAX_PRICE]; NaN and infinities become 0
pub fn sanitize_price(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        bounded(value, MAX_PRICE)
    } else {
        0.0
    }
}

/// Amount in [0, MAX_AMOUNT]; NaN and infinities become 0
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        bounded(value, MAX_AMOUNT)
    } else {
        0.0
    }
}

/// Percentage clamped to [0, 100]; NaN and infinities become 0
pub fn sanitize_percent(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, MAX_TAX_RATE)
}

fn bounded(value: f64, max: f64) -> f64 {
    if value > max {
        tracing::warn!(value, max, "Cart input above limit, clamping");
        max
    } else {
        value
    }
}

/// Sum of `unit_price * quantity` over all lines (unrounded)
///
/// Stored values are re-sanitised, so a hand-edited draft cannot overflow.
pub fn calculate_sub_total(draft: &CartDraft) -> Decimal {
    draft.items.iter().fold(Decimal::ZERO, |acc, item| {
        let price = to_decimal(sanitize_price(item.unit_price));
        let quantity = normalize_quantity(item.quantity).unwrap_or(Decimal::ZERO);
        acc.saturating_add(price.saturating_mul(quantity))
    })
}

/// Derive the cart totals
///
/// ```text
/// taxable      = max(0, sub_total - discount)
/// tax_amount   = round(taxable * tax_rate / 100)
/// total_amount = round(taxable + tax_amount)
/// ```
///
/// `money_places` is the number of decimals of the currency's smallest unit.
pub fn calculate_totals(draft: &CartDraft, money_places: u32) -> CartTotals {
    let sub_total = calculate_sub_total(draft);
    let discount = to_decimal(sanitize_amount(draft.discount));
    let tax_rate = to_decimal(sanitize_percent(draft.tax_rate));

    let taxable = (sub_total - discount).max(Decimal::ZERO);
    let applied_discount = discount.min(sub_total);
    let tax_amount = round_half_up(
        taxable.saturating_mul(tax_rate) / Decimal::ONE_HUNDRED,
        money_places,
    );
    let total_amount = round_half_up(taxable.saturating_add(tax_amount), money_places);

    CartTotals {
        sub_total: to_f64(round_half_up(sub_total, money_places)),
        applied_discount: to_f64(round_half_up(applied_discount, money_places)),
        tax_amount: to_f64(tax_amount),
        total_amount: to_f64(total_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::CartItem;

    fn item(product_id: i64, unit_price: f64, quantity: f64) -> CartItem {
        CartItem {
            product_id,
            name: format!("Product {product_id}"),
            unit_price,
            quantity,
            sku: None,
            unit: None,
        }
    }

    fn draft(items: Vec<CartItem>, discount: f64, tax_rate: f64) -> CartDraft {
        CartDraft {
            items,
            discount,
            tax_rate,
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_whole_currency_units() {
        let d = draft(vec![item(1, 10000.0, 2.0)], 0.0, 10.0);
        let totals = calculate_totals(&d, 0);
        assert_eq!(totals.sub_total, 20000.0);
        assert_eq!(totals.tax_amount, 2000.0);
        assert_eq!(totals.total_amount, 22000.0);
    }

    #[test]
    fn test_totals_discount_before_tax() {
        let d = draft(vec![item(1, 10000.0, 2.0)], 5000.0, 10.0);
        let totals = calculate_totals(&d, 0);
        assert_eq!(totals.sub_total, 20000.0);
        assert_eq!(totals.applied_discount, 5000.0);
        assert_eq!(totals.tax_amount, 1500.0);
        assert_eq!(totals.total_amount, 16500.0);
    }

    #[test]
    fn test_totals_discount_exceeding_sub_total() {
        let d = draft(vec![item(1, 300.0, 1.0)], 1000.0, 10.0);
        let totals = calculate_totals(&d, 0);
        assert_eq!(totals.applied_discount, 300.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total_amount, 0.0);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 1005 * 10% = 100.5 -> 101
        let d = draft(vec![item(1, 1005.0, 1.0)], 0.0, 10.0);
        let totals = calculate_totals(&d, 0);
        assert_eq!(totals.tax_amount, 101.0);
        assert_eq!(totals.total_amount, 1106.0);
    }

    #[test]
    fn test_totals_with_cents() {
        // 3 * 10.99 = 32.97; tax 21% = 6.9237 -> 6.92
        let d = draft(vec![item(1, 10.99, 3.0)], 0.0, 21.0);
        let totals = calculate_totals(&d, 2);
        assert_eq!(totals.sub_total, 32.97);
        assert_eq!(totals.tax_amount, 6.92);
        assert_eq!(totals.total_amount, 39.89);
    }

    #[test]
    fn test_weighed_goods_sub_total() {
        // 0.125 kg * 2400 = 300
        let d = draft(vec![item(1, 2400.0, 0.125)], 0.0, 0.0);
        assert_eq!(calculate_totals(&d, 0).total_amount, 300.0);
    }

    #[test]
    fn test_malformed_stored_fields_are_ignored() {
        let d = draft(vec![item(1, 100.0, 1.0)], f64::NAN, -5.0);
        let totals = calculate_totals(&d, 0);
        assert_eq!(totals.applied_discount, 0.0);
        assert_eq!(totals.tax_amount, 0.0);
        assert_eq!(totals.total_amount, 100.0);
    }

    #[test]
    fn test_empty_draft_totals() {
        assert_eq!(calculate_totals(&CartDraft::default(), 0), CartTotals::default());
    }

    #[test]
    fn test_quantity_accumulation_does_not_drift() {
        let mut q = Decimal::ZERO;
        for _ in 0..1000 {
            q = to_decimal(round_quantity(q + to_decimal(0.001)));
        }
        assert_eq!(to_f64(q), 1.0);
    }

    #[test]
    fn test_normalize_quantity() {
        assert_eq!(normalize_quantity(1.23456), Some(Decimal::new(1235, 3)));
        assert_eq!(normalize_quantity(0.0), None);
        assert_eq!(normalize_quantity(-1.0), None);
        assert_eq!(normalize_quantity(f64::NAN), None);
        assert_eq!(normalize_quantity(f64::INFINITY), None);
        assert_eq!(normalize_quantity(0.0004), None);
    }

    #[test]
    fn test_huge_line_is_clamped_not_panicking() {
        let d = draft(vec![item(1, 1e15, 1e15)], 0.0, 100.0);
        let totals = calculate_totals(&d, 2);
        assert_eq!(totals.sub_total, MAX_PRICE * MAX_QUANTITY);
        assert_eq!(totals.tax_amount, MAX_PRICE * MAX_QUANTITY);
        assert_eq!(totals.total_amount, 2.0 * MAX_PRICE * MAX_QUANTITY);
    }

    #[test]
    fn test_many_huge_lines_do_not_overflow() {
        let items = (0..1000).map(|id| item(id, f64::MAX, f64::MAX)).collect();
        let d = draft(items, f64::MAX, 100.0);
        let totals = calculate_totals(&d, 0);
        assert!(totals.total_amount.is_finite());
        assert_eq!(totals.sub_total, 1000.0 * MAX_PRICE * MAX_QUANTITY);
    }

    #[test]
    fn test_price_beyond_decimal_range_is_capped() {
        // 1e29 does not fit in a Decimal; it must not silently become free
        assert_eq!(sanitize_price(1e29), MAX_PRICE);
        let d = draft(vec![item(1, 1e29, 1.0)], 0.0, 0.0);
        assert_eq!(calculate_totals(&d, 0).total_amount, MAX_PRICE);
    }

    #[test]
    fn test_normalize_quantity_caps_at_max() {
        assert_eq!(normalize_quantity(1e15), Some(to_decimal(MAX_QUANTITY)));
        assert_eq!(cap_quantity(to_decimal(MAX_QUANTITY * 2.0)), to_decimal(MAX_QUANTITY));
    }

    #[test]
    fn test_sanitize_inputs() {
        assert_eq!(sanitize_price(f64::NAN), 0.0);
        assert_eq!(sanitize_price(-1.0), 0.0);
        assert_eq!(sanitize_price(12.5), 12.5);
        assert_eq!(sanitize_amount(1e30), MAX_AMOUNT);
        assert_eq!(sanitize_amount(f64::NAN), 0.0);
        assert_eq!(sanitize_amount(-3.0), 0.0);
        assert_eq!(sanitize_amount(12.5), 12.5);
        assert_eq!(sanitize_percent(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_percent(-1.0), 0.0);
        assert_eq!(sanitize_percent(150.0), 100.0);
        assert_eq!(sanitize_percent(11.0), 11.0);
    }
}
