//! Rest-day work rate calculation functionality.
//!
//! ## Rate Structure
//!
//! **Rest-day work escalates with duration:**
//! - First 2 hours: `rest_day_first_two_hours` (statutory 4/3)
//! - Hours 3 to 8: `rest_day_two_to_eight_hours` (statutory 5/3)
//! - Beyond 8 hours: `rest_day_over_eight_hours` (statutory 8/3)

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::CalculationDetail;

use super::bracket::{BracketTier, hours_between, price_tiers};

/// The threshold in hours for the first rest-day tier.
pub const REST_DAY_TIER_1_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The threshold in hours after which the top rest-day rate applies.
pub const REST_DAY_TIER_2_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Calculates pay for hours worked on a rest day.
///
/// Hours ≤ 0 yield zero pay and the single line `"no overtime"`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_rest_day_overtime;
/// use overtime_engine::config::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_rest_day_overtime(
///     Decimal::from(9),
///     Decimal::from(100),
///     &RateTable::statutory(),
/// )
/// .unwrap();
///
/// // 266.67 + 1000.00 + 266.67
/// assert_eq!(result.pay, Decimal::from_str("1533.33").unwrap());
/// assert_eq!(result.audit_steps.len(), 3);
/// ```
pub fn calculate_rest_day_overtime(
    hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
) -> EngineResult<CalculationDetail> {
    if hours <= Decimal::ZERO {
        return Ok(CalculationDetail::zero(hours, "no overtime"));
    }

    let tiers = [
        BracketTier {
            rule_id: "rest_day_tier_1",
            rule_name: "Rest day, first 2 hours",
            hours: hours_between(hours, Decimal::ZERO, Some(REST_DAY_TIER_1_THRESHOLD)),
            multiplier: rates.rest_day_first_two_hours(),
        },
        BracketTier {
            rule_id: "rest_day_tier_2",
            rule_name: "Rest day, hours 3 to 8",
            hours: hours_between(
                hours,
                REST_DAY_TIER_1_THRESHOLD,
                Some(REST_DAY_TIER_2_THRESHOLD),
            ),
            multiplier: rates.rest_day_two_to_eight_hours(),
        },
        BracketTier {
            rule_id: "rest_day_tier_3",
            rule_name: "Rest day, beyond 8 hours",
            hours: hours_between(hours, REST_DAY_TIER_2_THRESHOLD, None),
            multiplier: rates.rest_day_over_eight_hours(),
        },
    ];

    price_tiers(hours, hourly_rate, &tiers)
}
