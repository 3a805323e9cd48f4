//! Request types for the calculation boundary.
//!
//! This module defines the serde structures a caller (form, CLI, bindings)
//! fills with raw user input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{parse_salary, validate_salary};
use crate::config::{RateValues, RoundingMode};
use crate::error::EngineResult;
use crate::models::WorkHoursInput;

/// A monthly salary as supplied: a number, or text typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    /// A numeric amount, or a string holding one.
    Amount(Decimal),
    /// Anything else; rejected when resolved.
    Text(String),
}

impl SalaryInput {
    /// Returns the salary, failing with `InvalidSalary` unless it is a
    /// number greater than zero.
    pub fn resolve(&self) -> EngineResult<Decimal> {
        match self {
            SalaryInput::Amount(amount) => {
                validate_salary(*amount)?;
                Ok(*amount)
            }
            SalaryInput::Text(text) => parse_salary(text),
        }
    }
}

impl From<Decimal> for SalaryInput {
    fn from(amount: Decimal) -> Self {
        SalaryInput::Amount(amount)
    }
}

fn default_true() -> bool {
    true
}

/// A comprehensive calculation request.
///
/// `rate_table` and `rounding_mode` override the settings provider for this
/// request only.
///
/// # Example
///
/// ```
/// use overtime_engine::api::CalculationRequest;
///
/// let request: CalculationRequest = serde_json::from_str(
///     r#"{"monthly_salary": 36000, "weekday_overtime": "9,9,9,9"}"#,
/// )
/// .unwrap();
/// assert!(request.include_compliance);
/// assert!(request.holiday_work.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The monthly salary.
    pub monthly_salary: SalaryInput,
    /// Weekday overtime hours.
    #[serde(default)]
    pub weekday_overtime: String,
    /// Rest-day hours.
    #[serde(default)]
    pub rest_day_work: String,
    /// Statutory holiday hours.
    #[serde(default)]
    pub holiday_work: String,
    /// Regular day off hours.
    #[serde(default)]
    pub regular_day_off_work: String,
    /// Whether weekday overtime was compelled by an emergency.
    #[serde(default)]
    pub is_emergency: bool,
    /// Multipliers to use instead of the stored table.
    #[serde(default)]
    pub rate_table: Option<RateValues>,
    /// Rounding policy to use instead of the stored one.
    #[serde(default)]
    pub rounding_mode: Option<RoundingMode>,
    /// Whether to attach a compliance report.
    #[serde(default = "default_true")]
    pub include_compliance: bool,
    /// Whether to attach a rendered text report.
    #[serde(default)]
    pub include_report: bool,
}

impl CalculationRequest {
    /// A request for `monthly_salary` with no hours and default options.
    pub fn new(monthly_salary: impl Into<SalaryInput>) -> Self {
        Self {
            monthly_salary: monthly_salary.into(),
            weekday_overtime: String::new(),
            rest_day_work: String::new(),
            holiday_work: String::new(),
            regular_day_off_work: String::new(),
            is_emergency: false,
            rate_table: None,
            rounding_mode: None,
            include_compliance: true,
            include_report: false,
        }
    }

    /// The hour strings and emergency flag as engine input.
    pub fn work_hours(&self) -> WorkHoursInput {
        WorkHoursInput {
            weekday_overtime: self.weekday_overtime.clone(),
            rest_day_work: self.rest_day_work.clone(),
            holiday_work: self.holiday_work.clone(),
            regular_day_off_work: self.regular_day_off_work.clone(),
            is_emergency: self.is_emergency,
        }
    }
}
