//! Comprehensive pay calculation.
//!
//! Composes wage-base derivation, hour parsing and per-category aggregation
//! into a single call over all four work categories.

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::{RateTable, RoundingMode};
use crate::error::{EngineError, EngineResult};
use crate::models::{CategoryDetails, ComprehensiveResult, WorkCategory, WorkHoursInput};

use super::aggregator::{BracketFlags, bracket_for, compute_category};
use super::bracket::pay_overflow;
use super::hours_parser::parse_hours;
use super::money::round_to_cent;
use super::wage_base::derive_wage_base;

/// Example inputs appended to hour-format errors.
pub const HOURS_USAGE_EXAMPLES: &str =
    "use \"3\" for a single day or \"9,9,9,9\" for one value per day";

fn with_usage(category: WorkCategory, err: EngineError) -> EngineError {
    EngineError::CalculationError {
        message: format!("{}: {}; {}", category, err, HOURS_USAGE_EXAMPLES),
    }
}

/// Calculates premium pay for every non-empty category in `input`.
///
/// The salary is checked before anything else. Each category with input is
/// parsed, priced via its bracket function (per day when several days are
/// listed) and added to the total. The rate table is only read.
///
/// # Errors
///
/// - [`EngineError::InvalidSalary`] if `salary` is not strictly positive
/// - [`EngineError::CalculationError`] if any hour string is malformed or a
///   pay or hour total does not fit in a [`Decimal`]; no partial result is
///   returned
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_comprehensive;
/// use overtime_engine::config::{RateTable, RoundingMode};
/// use overtime_engine::models::{WorkCategory, WorkHoursInput};
/// use rust_decimal::Decimal;
///
/// let input = WorkHoursInput {
///     holiday_work: "8".to_string(),
///     ..Default::default()
/// };
/// let result = calculate_comprehensive(
///     Decimal::from(24000),
///     &input,
///     &RateTable::statutory(),
///     RoundingMode::Ceiling,
/// )
/// .unwrap();
///
/// assert_eq!(result.hourly_rate, Decimal::from(100));
/// assert_eq!(result.total_pay, Decimal::from(1600));
/// assert!(result.categories.get(WorkCategory::RestDay).is_none());
/// ```
pub fn calculate_comprehensive(
    salary: Decimal,
    input: &WorkHoursInput,
    rates: &RateTable,
    rounding_mode: RoundingMode,
) -> EngineResult<ComprehensiveResult> {
    let wage_base = derive_wage_base(salary, rounding_mode)?;
    let flags = BracketFlags {
        is_emergency: input.is_emergency,
    };

    let mut categories = CategoryDetails::default();
    let mut total_pay = Decimal::ZERO;
    let mut total_hours = Decimal::ZERO;

    for category in WorkCategory::ALL {
        let parsed = match parse_hours(input.raw(category)) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => return Err(with_usage(category, err)),
        };

        let detail = compute_category(
            &parsed,
            wage_base.hourly_rate,
            rates,
            bracket_for(category),
            flags,
        )?;
        debug!(
            category = %category,
            days = parsed.per_day.len(),
            hours = %detail.hours,
            pay = %detail.pay,
            "Priced work category"
        );

        total_pay = total_pay
            .checked_add(detail.pay)
            .ok_or_else(|| pay_overflow("Total"))?;
        total_hours = total_hours.checked_add(detail.hours).ok_or_else(|| {
            EngineError::CalculationError {
                message: "Total hours are too large to represent".to_string(),
            }
        })?;
        categories.insert(category, detail);
    }

    let total_pay = round_to_cent(total_pay);
    info!(
        categories = categories.len(),
        hourly_rate = %wage_base.hourly_rate,
        total_pay = %total_pay,
        "Comprehensive calculation completed"
    );

    Ok(ComprehensiveResult {
        hourly_rate: wage_base.hourly_rate,
        daily_wage: wage_base.daily_wage,
        rounding_mode,
        categories,
        total_hours,
        total_pay,
    })
}
