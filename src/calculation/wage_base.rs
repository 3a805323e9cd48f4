//! Wage base derivation.
//!
//! This module derives the hourly rate and daily wage from a monthly salary.
//! The divisors encode the statutory monthly basis of 30 days of 8 hours.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RoundingMode;
use crate::error::{EngineError, EngineResult};

use super::money::round_to_cent;

/// Hours in the statutory month (30 days × 8 hours).
pub const MONTHLY_HOURS_DIVISOR: Decimal = Decimal::from_parts(240, 0, 0, false, 0);

/// Days in the statutory month.
pub const MONTHLY_DAYS_DIVISOR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// The unit prices every premium is multiplied from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageBase {
    /// Salary divided by 240, rounded per the rounding mode.
    pub hourly_rate: Decimal,
    /// Salary divided by 30, rounded per the rounding mode.
    pub daily_wage: Decimal,
}

/// Rejects salaries that are zero or negative.
pub fn validate_salary(salary: Decimal) -> EngineResult<()> {
    if salary <= Decimal::ZERO {
        return Err(EngineError::InvalidSalary {
            value: salary.normalize().to_string(),
        });
    }
    Ok(())
}

/// Parses a salary typed by a user. Non-numeric input is an invalid salary,
/// as is any value that is not strictly positive.
pub fn parse_salary(raw: &str) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    let salary = Decimal::from_str(trimmed).map_err(|_| EngineError::InvalidSalary {
        value: trimmed.to_string(),
    })?;
    validate_salary(salary)?;
    Ok(salary)
}

fn apply_rounding(value: Decimal, mode: RoundingMode) -> Decimal {
    match mode {
        RoundingMode::Ceiling => value.ceil(),
        RoundingMode::NearestCent => round_to_cent(value),
    }
}

/// Derives the hourly rate: `salary / 240`, rounded per `mode`.
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::hourly_rate;
/// use overtime_engine::config::RoundingMode;
/// use rust_decimal::Decimal;
///
/// assert_eq!(hourly_rate(Decimal::from(7200), RoundingMode::Ceiling).unwrap(), Decimal::from(30));
/// // 7250 / 240 = 30.208..., rounded up
/// assert_eq!(hourly_rate(Decimal::from(7250), RoundingMode::Ceiling).unwrap(), Decimal::from(31));
/// ```
pub fn hourly_rate(salary: Decimal, mode: RoundingMode) -> EngineResult<Decimal> {
    validate_salary(salary)?;
    Ok(apply_rounding(salary / MONTHLY_HOURS_DIVISOR, mode))
}

/// Derives the daily wage: `salary / 30`, rounded per `mode`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::daily_wage;
/// use overtime_engine::config::RoundingMode;
/// use rust_decimal::Decimal;
///
/// assert_eq!(daily_wage(Decimal::from(7200), RoundingMode::Ceiling).unwrap(), Decimal::from(240));
/// ```
pub fn daily_wage(salary: Decimal, mode: RoundingMode) -> EngineResult<Decimal> {
    validate_salary(salary)?;
    Ok(apply_rounding(salary / MONTHLY_DAYS_DIVISOR, mode))
}

/// Derives both wage figures in one step.
pub fn derive_wage_base(salary: Decimal, mode: RoundingMode) -> EngineResult<WageBase> {
    let wage_base = WageBase {
        hourly_rate: hourly_rate(salary, mode)?,
        daily_wage: daily_wage(salary, mode)?,
    };
    debug!(
        salary = %salary,
        rounding_mode = %mode,
        hourly_rate = %wage_base.hourly_rate,
        daily_wage = %wage_base.daily_wage,
        "Derived wage base"
    );
    Ok(wage_base)
}
