//! Calculation result models for the overtime engine.
//!
//! This module contains the [`ComprehensiveResult`] type and its associated
//! structures that capture all outputs from a pay calculation, including
//! per-category details, per-day breakdowns, audit steps and compliance
//! warnings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::RoundingMode;

use super::WorkCategory;

/// A single step in the audit trail recording one sub-bracket computation.
///
/// # Example
///
/// ```
/// use overtime_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "weekday_overtime_tier_1".to_string(),
///     rule_name: "Weekday Overtime, First 2 Hours".to_string(),
///     input: serde_json::json!({"hours": "2", "hourly_rate": "100"}),
///     output: serde_json::json!({"multiplier": "1.3333", "amount": "266.67"}),
///     reasoning: "2 h × $100 × 1.3333 = $266.67".to_string(),
/// };
/// assert_eq!(step.step_number, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number within its category.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the computation.
    pub reasoning: String,
}

/// A non-fatal warning surfaced alongside a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("medium" or "high").
    pub severity: String,
}

/// Pay for one day in a multi-day category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// 1-based position of the day in the input.
    pub day: u32,
    /// Hours worked that day.
    pub hours: Decimal,
    /// Pay for that day, rounded to the cent.
    pub pay: Decimal,
}

/// The priced result for one work category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationDetail {
    /// Total hours in the category, as entered. This is the signed sum of
    /// every listed day, so zero and negative days count even though they
    /// earn nothing.
    pub hours: Decimal,
    /// Pay for the category, rounded to the cent.
    pub pay: Decimal,
    /// Ordered, human-readable computation trail.
    pub narrative: Vec<String>,
    /// Per-day pay, present only when the input listed several days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_day_breakdown: Option<Vec<DayBreakdown>>,
    /// Structured record of every sub-bracket applied.
    pub audit_steps: Vec<AuditStep>,
}

impl CalculationDetail {
    /// A zero-pay detail with a single narrative line.
    pub fn zero(hours: Decimal, note: &str) -> Self {
        Self {
            hours,
            pay: Decimal::ZERO,
            narrative: vec![note.to_string()],
            per_day_breakdown: None,
            audit_steps: Vec::new(),
        }
    }
}

/// One optional [`CalculationDetail`] per [`WorkCategory`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    /// Weekday overtime detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_overtime: Option<CalculationDetail>,
    /// Rest-day detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_day: Option<CalculationDetail>,
    /// Statutory holiday detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday: Option<CalculationDetail>,
    /// Regular day off detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_day_off: Option<CalculationDetail>,
}

impl CategoryDetails {
    fn slot_mut(&mut self, category: WorkCategory) -> &mut Option<CalculationDetail> {
        match category {
            WorkCategory::WeekdayOvertime => &mut self.weekday_overtime,
            WorkCategory::RestDay => &mut self.rest_day,
            WorkCategory::Holiday => &mut self.holiday,
            WorkCategory::RegularDayOff => &mut self.regular_day_off,
        }
    }

    /// Returns the detail for `category`, if that category was used.
    pub fn get(&self, category: WorkCategory) -> Option<&CalculationDetail> {
        match category {
            WorkCategory::WeekdayOvertime => self.weekday_overtime.as_ref(),
            WorkCategory::RestDay => self.rest_day.as_ref(),
            WorkCategory::Holiday => self.holiday.as_ref(),
            WorkCategory::RegularDayOff => self.regular_day_off.as_ref(),
        }
    }

    /// Stores the detail for `category`.
    pub fn insert(&mut self, category: WorkCategory, detail: CalculationDetail) {
        *self.slot_mut(category) = Some(detail);
    }

    /// Iterates the present details in report order.
    pub fn iter(&self) -> impl Iterator<Item = (WorkCategory, &CalculationDetail)> {
        WorkCategory::ALL
            .into_iter()
            .filter_map(|category| self.get(category).map(|detail| (category, detail)))
    }

    /// Number of categories with a detail.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no category was used.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The complete result of a comprehensive pay calculation.
///
/// # Example
///
/// ```
/// use overtime_engine::config::RoundingMode;
/// use overtime_engine::models::{CategoryDetails, ComprehensiveResult};
/// use rust_decimal::Decimal;
///
/// let result = ComprehensiveResult {
///     hourly_rate: Decimal::from(30),
///     daily_wage: Decimal::from(240),
///     rounding_mode: RoundingMode::Ceiling,
///     categories: CategoryDetails::default(),
///     total_hours: Decimal::ZERO,
///     total_pay: Decimal::ZERO,
/// };
/// assert!(result.categories.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComprehensiveResult {
    /// The derived hourly wage base.
    pub hourly_rate: Decimal,
    /// The derived daily wage.
    pub daily_wage: Decimal,
    /// The rounding policy used for the wage base.
    pub rounding_mode: RoundingMode,
    /// Per-category details; absent categories had empty input.
    pub categories: CategoryDetails,
    /// Sum of each present category's `hours`. Negative day values lower it.
    pub total_hours: Decimal,
    /// Sum of all category pays, rounded to the cent.
    pub total_pay: Decimal,
}

/// Outcome of the advisory daily-hours check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// False if any category breached a ceiling or failed to parse.
    pub is_valid: bool,
    /// One warning per problem found.
    pub warnings: Vec<AuditWarning>,
}
