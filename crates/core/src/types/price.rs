//! Monetary rounding helpers using decimal arithmetic.
//!
//! Prices are held as [`rust_decimal::Decimal`], never floating point.
//! Monetary rounding is applied per line before summation to avoid floating
//! accumulation drift, and grand totals are rounded to 2 decimals again.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to 2 decimal places.
///
/// Uses midpoint-away-from-zero rounding, matching how currency amounts are
/// conventionally rounded ($0.005 rounds up to $0.01).
#[must_use]
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compute the rounded total of one cart line: `round2(price × quantity)`.
#[must_use]
pub fn line_total(price: Decimal, quantity: u32) -> Decimal {
    round2(price * Decimal::from(quantity))
}
