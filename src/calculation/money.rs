//! Cent rounding and display helpers shared by the calculators.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to two decimal places, half away from zero.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::round_to_cent;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cent(Decimal::from_str("266.665").unwrap()).to_string(), "266.67");
/// assert_eq!(round_to_cent(Decimal::from_str("-0.005").unwrap()).to_string(), "-0.01");
/// ```
pub fn round_to_cent(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplier as shown in narratives; four places is enough to tell 4/3 from 1.33.
pub(crate) fn display_multiplier(multiplier: Decimal) -> String {
    multiplier.round_dp(4).normalize().to_string()
}

pub(crate) fn display_amount(amount: Decimal) -> String {
    format!("{:.2}", round_to_cent(amount))
}
