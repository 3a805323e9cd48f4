//! Holiday and regular-day-off pay.
//!
//! Both are flat: every hour is charged at one multiplier regardless of
//! how long the attendance lasted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::CalculationDetail;

use super::bracket::{BracketTier, price_tiers};

/// Which flat multiplier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    /// A statutory holiday worked instead of rested.
    StatutoryHoliday,
    /// A regular (mandatory) day off.
    RegularDayOff,
}

/// Calculates flat holiday or regular-day-off pay.
///
/// Hours ≤ 0 yield zero pay and the single line `"no attendance"`. Pay
/// that does not fit in a [`Decimal`] is a
/// [`crate::error::EngineError::CalculationError`].
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{HolidayKind, calculate_holiday_pay};
/// use overtime_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let result = calculate_holiday_pay(
///     Decimal::from(8),
///     Decimal::from(100),
///     &RateTable::statutory(),
///     HolidayKind::StatutoryHoliday,
/// )
/// .unwrap();
///
/// assert_eq!(result.pay, Decimal::from(1600));
/// ```
pub fn calculate_holiday_pay(
    hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
    kind: HolidayKind,
) -> EngineResult<CalculationDetail> {
    if hours <= Decimal::ZERO {
        return Ok(CalculationDetail::zero(hours, "no attendance"));
    }

    let tier = match kind {
        HolidayKind::StatutoryHoliday => BracketTier {
            rule_id: "holiday_flat",
            rule_name: "Holiday work, all hours",
            hours,
            multiplier: rates.holiday(),
        },
        HolidayKind::RegularDayOff => BracketTier {
            rule_id: "regular_day_off_flat",
            rule_name: "Regular day off work, all hours",
            hours,
            multiplier: rates.regular_day_off(),
        },
    };

    price_tiers(hours, hourly_rate, &[tier])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTableUpdate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_statutory_holiday_8h() {
        let result = calculate_holiday_pay(
            dec("8"),
            dec("100"),
            &RateTable::statutory(),
            HolidayKind::StatutoryHoliday,
        )
        .unwrap();

        assert_eq!(result.pay, dec("1600.00"));
        assert_eq!(result.narrative.len(), 1);
        assert_eq!(result.audit_steps[0].rule_id, "holiday_flat");
    }

    #[test]
    fn test_flat_regardless_of_duration() {
        let rates = RateTable::statutory();
        let holiday = HolidayKind::StatutoryHoliday;
        let short = calculate_holiday_pay(dec("1"), dec("100"), &rates, holiday).unwrap();
        let long = calculate_holiday_pay(dec("11"), dec("100"), &rates, holiday).unwrap();

        assert_eq!(short.pay, dec("200"));
        assert_eq!(long.pay, dec("2200"));
    }

    #[test]
    fn test_regular_day_off_uses_its_own_multiplier() {
        let rates = RateTable::statutory()
            .with_update(&RateTableUpdate {
                regular_day_off: Some(dec("3")),
                ..Default::default()
            })
            .unwrap();

        let holiday =
            calculate_holiday_pay(dec("4"), dec("50"), &rates, HolidayKind::StatutoryHoliday)
                .unwrap();
        let day_off =
            calculate_holiday_pay(dec("4"), dec("50"), &rates, HolidayKind::RegularDayOff)
                .unwrap();

        assert_eq!(holiday.pay, dec("400"));
        assert_eq!(day_off.pay, dec("600"));
        assert_eq!(day_off.audit_steps[0].rule_id, "regular_day_off_flat");
    }

    #[test]
    fn test_no_attendance() {
        let result = calculate_holiday_pay(
            dec("0"),
            dec("100"),
            &RateTable::statutory(),
            HolidayKind::RegularDayOff,
        )
        .unwrap();

        assert_eq!(result.pay, Decimal::ZERO);
        assert_eq!(result.narrative, vec!["no attendance".to_string()]);
    }

    #[test]
    fn test_pay_overflow_is_an_error() {
        let result = calculate_holiday_pay(
            dec("1000000000000000000000000000"),
            dec("100"),
            &RateTable::statutory(),
            HolidayKind::StatutoryHoliday,
        );

        assert!(matches!(
            result,
            Err(crate::error::EngineError::CalculationError { .. })
        ));
    }
}
