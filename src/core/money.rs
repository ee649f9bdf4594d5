//! Decimal helpers shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::error::FiscalError;

/// Round a money amount to bani (2 decimal places), midpoint away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to whole RON, midpoint away from zero.
pub fn round_ron(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// `rate` percent of `amount`, unrounded.
pub fn percent(amount: Decimal, rate: Decimal) -> Decimal {
    amount * rate / dec!(100)
}

/// Largest amount any calculator accepts as input.
///
/// Products of two bounded inputs stay well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1_000_000_000);

fn ensure_bounded(field: &str, amount: Decimal) -> Result<Decimal, FiscalError> {
    if amount > MAX_AMOUNT {
        return Err(FiscalError::InvalidInput(format!(
            "{field} must not exceed {MAX_AMOUNT}, got {amount}"
        )));
    }
    Ok(amount)
}

/// Reject zero, negative and out-of-range amounts.
pub fn ensure_positive(field: &str, amount: Decimal) -> Result<Decimal, FiscalError> {
    if amount <= Decimal::ZERO {
        return Err(FiscalError::InvalidInput(format!(
            "{field} must be positive, got {amount}"
        )));
    }
    ensure_bounded(field, amount)
}

/// Reject negative and out-of-range amounts.
pub fn ensure_non_negative(field: &str, amount: Decimal) -> Result<Decimal, FiscalError> {
    if amount < Decimal::ZERO {
        return Err(FiscalError::InvalidInput(format!(
            "{field} must not be negative, got {amount}"
        )));
    }
    ensure_bounded(field, amount)
}
