//! Advisory daily-hours compliance check.
//!
//! Flags categories whose busiest day exceeds the recommended or the
//! absolute daily ceiling. The check never blocks a pay calculation.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{AuditWarning, ComplianceReport, WorkCategory, WorkHoursInput};

use super::hours_parser::parse_hours;

/// Hours no category may exceed on any single day.
pub const ABSOLUTE_DAILY_LIMIT: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Recommended maximum hours per day for `category`.
pub fn recommended_daily_limit(category: WorkCategory) -> Decimal {
    match category {
        WorkCategory::WeekdayOvertime => Decimal::from(4),
        WorkCategory::RestDay | WorkCategory::Holiday | WorkCategory::RegularDayOff => {
            Decimal::from(8)
        }
    }
}

fn warning(code: &str, severity: &str, message: String) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message,
        severity: severity.to_string(),
    }
}

/// Checks every non-empty category of `input` against the daily ceilings.
///
/// A category over [`ABSOLUTE_DAILY_LIMIT`] gets a `DAILY_LIMIT_EXCEEDED`
/// warning; one over only its recommended limit gets
/// `RECOMMENDED_LIMIT_EXCEEDED`. Unparsable input gets
/// `INVALID_HOURS_FORMAT` and the remaining categories are still checked.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::validate_work_hours;
/// use overtime_engine::models::WorkHoursInput;
///
/// let input = WorkHoursInput {
///     weekday_overtime: "2,6".to_string(),
///     ..Default::default()
/// };
/// let report = validate_work_hours(&input);
///
/// assert!(!report.is_valid);
/// assert_eq!(report.warnings[0].code, "RECOMMENDED_LIMIT_EXCEEDED");
/// ```
pub fn validate_work_hours(input: &WorkHoursInput) -> ComplianceReport {
    let mut warnings = Vec::new();

    for category in WorkCategory::ALL {
        let parsed = match parse_hours(input.raw(category)) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => {
                warnings.push(warning(
                    "INVALID_HOURS_FORMAT",
                    "high",
                    format!("{}: {}", category, err),
                ));
                continue;
            }
        };

        let (day, max_hours) = parsed.max_day();
        let when = if parsed.is_multi_day() {
            format!(" on day {}", day)
        } else {
            String::new()
        };
        let recommended = recommended_daily_limit(category);

        if max_hours > ABSOLUTE_DAILY_LIMIT {
            warnings.push(warning(
                "DAILY_LIMIT_EXCEEDED",
                "high",
                format!(
                    "{}: {} hours{} exceeds the {}-hour daily limit",
                    category,
                    max_hours.normalize(),
                    when,
                    ABSOLUTE_DAILY_LIMIT
                ),
            ));
        } else if max_hours > recommended {
            warnings.push(warning(
                "RECOMMENDED_LIMIT_EXCEEDED",
                "medium",
                format!(
                    "{}: {} hours{} exceeds the recommended {} hours per day",
                    category,
                    max_hours.normalize(),
                    when,
                    recommended
                ),
            ));
        }
    }

    for breach in &warnings {
        warn!(code = %breach.code, message = %breach.message, "Compliance warning");
    }

    ComplianceReport {
        is_valid: warnings.is_empty(),
        warnings,
    }
}
