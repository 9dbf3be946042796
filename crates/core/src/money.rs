//! # Money Module
//!
//! Balances, amounts and rates are `rust_decimal::Decimal` so that
//! interest arithmetic is exact (`1000.0 * 1.01 == 1010.0`).

use rust_decimal::Decimal;

/// Formats an amount the way account statements print it.
///
/// Trailing zeros are stripped, but an integral amount keeps one decimal
/// place: `0.0`, `1010.0`, `-112.0`, `1010.5`.
///
/// # Examples
/// ```
/// use konto_core::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(101000, 2)), "1010.0");
/// assert_eq!(format_amount(Decimal::new(-1125, 1)), "-112.5");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    // normalize() also turns -0 into 0
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{}.0", normalized)
    } else {
        normalized.to_string()
    }
}
