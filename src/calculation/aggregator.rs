//! Per-category aggregation.
//!
//! Decides whether a category is priced once on its total or independently
//! per day, and selects the bracket function for each [`WorkCategory`].
//! Brackets reset daily, so a multi-day input is never priced on its sum.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{CalculationDetail, DayBreakdown, ParsedHours, WorkCategory};

use super::bracket::pay_overflow;
use super::holiday_pay::{HolidayKind, calculate_holiday_pay};
use super::money::round_to_cent;
use super::rest_day_overtime::calculate_rest_day_overtime;
use super::weekday_overtime::calculate_weekday_overtime;

/// Flags a bracket function may consult.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BracketFlags {
    /// Weekday overtime compelled by an emergency.
    pub is_emergency: bool,
}

/// A bracket function: (hours, hourly rate, table, flags) → priced detail.
pub type BracketFn =
    fn(Decimal, Decimal, &RateTable, BracketFlags) -> EngineResult<CalculationDetail>;

fn weekday_strategy(
    hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
    flags: BracketFlags,
) -> EngineResult<CalculationDetail> {
    calculate_weekday_overtime(hours, hourly_rate, rates, flags.is_emergency)
}

fn rest_day_strategy(
    hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
    _flags: BracketFlags,
) -> EngineResult<CalculationDetail> {
    calculate_rest_day_overtime(hours, hourly_rate, rates)
}

fn holiday_strategy(
    hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
    _flags: BracketFlags,
) -> EngineResult<CalculationDetail> {
    calculate_holiday_pay(hours, hourly_rate, rates, HolidayKind::StatutoryHoliday)
}

fn regular_day_off_strategy(
    hours: Decimal,
    hourly_rate: Decimal,
    rates: &RateTable,
    _flags: BracketFlags,
) -> EngineResult<CalculationDetail> {
    calculate_holiday_pay(hours, hourly_rate, rates, HolidayKind::RegularDayOff)
}

/// Returns the bracket function that prices `category`.
pub fn bracket_for(category: WorkCategory) -> BracketFn {
    match category {
        WorkCategory::WeekdayOvertime => weekday_strategy,
        WorkCategory::RestDay => rest_day_strategy,
        WorkCategory::Holiday => holiday_strategy,
        WorkCategory::RegularDayOff => regular_day_off_strategy,
    }
}

/// Prices one category's parsed hours.
///
/// A single day is passed straight to `bracket` and its detail returned
/// unchanged. Several days are priced one by one; the total is the sum of
/// the cent-rounded day pays and the narrative becomes a one-line summary
/// plus a per-day breakdown. Days with hours ≤ 0 add nothing and are left
/// out of the breakdown. A pay total that overflows is a
/// [`crate::error::EngineError::CalculationError`].
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{BracketFlags, bracket_for, compute_category, parse_hours};
/// use overtime_engine::config::RateTable;
/// use overtime_engine::models::WorkCategory;
/// use rust_decimal::Decimal;
///
/// let parsed = parse_hours("9,9").unwrap().unwrap();
/// let detail = compute_category(
///     &parsed,
///     Decimal::from(100),
///     &RateTable::statutory(),
///     bracket_for(WorkCategory::WeekdayOvertime),
///     BracketFlags::default(),
/// )
/// .unwrap();
///
/// assert_eq!(detail.narrative, vec!["2 days, computed independently".to_string()]);
/// assert_eq!(detail.per_day_breakdown.unwrap().len(), 2);
/// ```
pub fn compute_category(
    parsed: &ParsedHours,
    hourly_rate: Decimal,
    rates: &RateTable,
    bracket: BracketFn,
    flags: BracketFlags,
) -> EngineResult<CalculationDetail> {
    if !parsed.is_multi_day() {
        return bracket(parsed.total, hourly_rate, rates, flags);
    }

    let mut pay = Decimal::ZERO;
    let mut breakdown = Vec::new();
    let mut audit_steps = Vec::new();

    for (index, &hours) in parsed.per_day.iter().enumerate() {
        let day = index as u32 + 1;
        let detail = bracket(hours, hourly_rate, rates, flags)?;
        pay = pay
            .checked_add(detail.pay)
            .ok_or_else(|| pay_overflow(&format!("Day {}", day)))?;

        if hours <= Decimal::ZERO {
            continue;
        }

        breakdown.push(DayBreakdown {
            day,
            hours,
            pay: detail.pay,
        });

        for mut step in detail.audit_steps {
            step.step_number = audit_steps.len() as u32 + 1;
            if let Some(input) = step.input.as_object_mut() {
                input.insert("day".to_string(), serde_json::json!(day));
            }
            audit_steps.push(step);
        }
    }

    Ok(CalculationDetail {
        hours: parsed.total,
        pay: round_to_cent(pay),
        narrative: vec![format!(
            "{} days, computed independently",
            parsed.per_day.len()
        )],
        per_day_breakdown: Some(breakdown),
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::parse_hours;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn parsed(raw: &str) -> ParsedHours {
        parse_hours(raw).unwrap().unwrap()
    }

    fn price(raw: &str, category: WorkCategory, flags: BracketFlags) -> CalculationDetail {
        compute_category(
            &parsed(raw),
            dec("100"),
            &RateTable::statutory(),
            bracket_for(category),
            flags,
        )
        .unwrap()
    }

    #[test]
    fn test_single_day_passes_bracket_detail_through() {
        let rates = RateTable::statutory();

        let detail = price("3", WorkCategory::WeekdayOvertime, BracketFlags::default());
        let direct = calculate_weekday_overtime(dec("3"), dec("100"), &rates, false).unwrap();

        assert_eq!(detail, direct);
        assert!(detail.per_day_breakdown.is_none());
    }

    #[test]
    fn test_multi_day_resets_brackets_each_day() {
        let rates = RateTable::statutory();

        let detail = price("9,9,9,9", WorkCategory::WeekdayOvertime, BracketFlags::default());
        let one_day = calculate_weekday_overtime(dec("9"), dec("100"), &rates, false).unwrap();
        let lumped = calculate_weekday_overtime(dec("36"), dec("100"), &rates, false).unwrap();

        assert_eq!(detail.pay, one_day.pay * Decimal::from(4));
        assert_ne!(detail.pay, lumped.pay);
        assert_eq!(detail.hours, dec("36"));
        assert_eq!(detail.narrative, vec!["4 days, computed independently".to_string()]);
    }

    #[test]
    fn test_multi_day_breakdown_skips_non_positive_days() {
        let detail = price("2, 0, -1, 8", WorkCategory::RestDay, BracketFlags::default());
        let breakdown = detail.per_day_breakdown.unwrap();

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].day, 1);
        assert_eq!(breakdown[0].pay, dec("266.67"));
        assert_eq!(breakdown[1].day, 4);
        assert_eq!(breakdown[1].pay, dec("1266.67"));
        assert_eq!(detail.pay, dec("1533.34"));
        assert_eq!(detail.narrative, vec!["4 days, computed independently".to_string()]);
    }

    #[test]
    fn test_multi_day_total_is_sum_of_rounded_days() {
        // Each day: 1 × 100 × 4/3 = 133.333... → 133.33; three days → 399.99, not 400.00
        let detail = price("1,1,1", WorkCategory::WeekdayOvertime, BracketFlags::default());
        assert_eq!(detail.pay, dec("399.99"));
    }

    #[test]
    fn test_multi_day_audit_steps_are_renumbered_and_tagged() {
        let detail = price("3,1", WorkCategory::WeekdayOvertime, BracketFlags::default());

        let numbers: Vec<u32> = detail.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(detail.audit_steps[0].input["day"], serde_json::json!(1));
        assert_eq!(detail.audit_steps[2].input["day"], serde_json::json!(2));
    }

    #[test]
    fn test_emergency_flag_reaches_weekday_bracket() {
        let flags = BracketFlags { is_emergency: true };

        let weekday = price("3,3", WorkCategory::WeekdayOvertime, flags);
        assert_eq!(weekday.pay, dec("1200"));

        // Other categories ignore the flag
        let holiday = price("3", WorkCategory::Holiday, flags);
        assert_eq!(holiday.pay, dec("600"));
    }

    #[test]
    fn test_strategy_table_covers_each_category() {
        let rates = RateTable::statutory();
        let hours = dec("9");
        let rate = dec("100");
        let flags = BracketFlags::default();

        let rest_day = bracket_for(WorkCategory::RestDay)(hours, rate, &rates, flags).unwrap();
        assert_eq!(rest_day.pay, dec("1533.33"));

        let day_off = bracket_for(WorkCategory::RegularDayOff)(hours, rate, &rates, flags).unwrap();
        assert_eq!(day_off.audit_steps[0].rule_id, "regular_day_off_flat");
    }

    #[test]
    fn test_day_sum_overflow_is_an_error() {
        // Each day prices just under the limit; two of them do not fit
        let hours = dec("10000000000000000000000000");
        let days = ParsedHours {
            total: hours * Decimal::from(2),
            per_day: vec![hours, hours],
        };

        let result = compute_category(
            &days,
            dec("2000"),
            &RateTable::statutory(),
            bracket_for(WorkCategory::Holiday),
            BracketFlags::default(),
        );
        assert!(matches!(
            result,
            Err(crate::error::EngineError::CalculationError { .. })
        ));
    }
}
