//! Weekday overtime rate calculation functionality.
//!
//! This module provides the function for pricing overtime worked on an
//! ordinary working day.
//!
//! ## Rate Structure
//!
//! **Weekday overtime is tiered:**
//! - First 2 hours: `weekday_first_two_hours` (statutory 4/3)
//! - Hours 3 and 4: `weekday_next_two_hours` (statutory 5/3)
//! - Beyond 4 hours: still `weekday_next_two_hours`; there is no third rate
//!
//! **Under the emergency override** all hours are charged at the flat
//! `weekday_emergency` multiplier (statutory 2) regardless of duration.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::CalculationDetail;

use super::bracket::{BracketTier, hours_between, price_tiers};

/// The threshold in hours for tier 1 weekday overtime.
pub const WEEKDAY_OT_TIER_1_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The threshold in hours for tier 2 weekday overtime.
pub const WEEKDAY_OT_TIER_2_THRESHOLD: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Calculates weekday overtime pay.
///
/// # Arguments
///
/// * `overtime_hours` - Overtime hours worked on the day
/// * `hourly_rate` - The derived hourly wage base
/// * `rates` - The multiplier table
/// * `is_emergency` - Whether the flat emergency multiplier applies
///
/// # Returns
///
/// A [`CalculationDetail`] with one narrative line and audit step per tier
/// applied. Hours ≤ 0 yield zero pay and the single line `"no overtime"`.
///
/// # Errors
///
/// [`crate::error::EngineError::CalculationError`] if the pay does not fit
/// in a [`Decimal`].
///
/// # Examples
///
/// ## 3 hours (both tiers)
///
/// ```
/// use overtime_engine::calculation::calculate_weekday_overtime;
/// use overtime_engine::config::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_weekday_overtime(
///     Decimal::from(3),
///     Decimal::from(100),
///     &RateTable::statutory(),
///     false,
/// )
/// .unwrap();
///
/// // 2 × 100 × 4/3 + 1 × 100 × 5/3
/// assert_eq!(result.pay, Decimal::from_str("433.33").unwrap());
/// assert_eq!(result.narrative.len(), 2);
/// ```
///
/// ## Emergency override
///
/// ```
/// use overtime_engine::calculation::calculate_weekday_overtime;
/// use overtime_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let result = calculate_weekday_overtime(
///     Decimal::from(6),
///     Decimal::from(100),
///     &RateTable::statutory(),
///     true,
/// )
/// .unwrap();
///
/// assert_eq!(result.pay, Decimal::from(1200));
/// ```
pub fn calculate_weekday_overtime(
    overtime_hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
    is_emergency: bool,
) -> EngineResult<CalculationDetail> {
    if overtime_hours <= Decimal::ZERO {
        return Ok(CalculationDetail::zero(overtime_hours, "no overtime"));
    }

    if is_emergency {
        let tier = BracketTier {
            rule_id: "weekday_overtime_emergency",
            rule_name: "Emergency overtime, all hours",
            hours: overtime_hours,
            multiplier: rates.weekday_emergency(),
        };
        return price_tiers(overtime_hours, hourly_rate, &[tier]);
    }

    let tiers = [
        BracketTier {
            rule_id: "weekday_overtime_tier_1",
            rule_name: "Weekday overtime, first 2 hours",
            hours: hours_between(
                overtime_hours,
                Decimal::ZERO,
                Some(WEEKDAY_OT_TIER_1_THRESHOLD),
            ),
            multiplier: rates.weekday_first_two_hours(),
        },
        BracketTier {
            rule_id: "weekday_overtime_tier_2",
            rule_name: "Weekday overtime, hours 3 to 4",
            hours: hours_between(
                overtime_hours,
                WEEKDAY_OT_TIER_1_THRESHOLD,
                Some(WEEKDAY_OT_TIER_2_THRESHOLD),
            ),
            multiplier: rates.weekday_next_two_hours(),
        },
        BracketTier {
            rule_id: "weekday_overtime_beyond_4",
            rule_name: "Weekday overtime, beyond 4 hours",
            hours: hours_between(overtime_hours, WEEKDAY_OT_TIER_2_THRESHOLD, None),
            multiplier: rates.weekday_next_two_hours(),
        },
    ];

    price_tiers(overtime_hours, hourly_rate, &tiers)
}
