//! Plain-text itemized report.

use std::fmt::Write;

use crate::models::ComprehensiveResult;

/// Renders `result` as an itemized text report.
///
/// One section per category that had input, listing its hours, the
/// computation trail and any per-day rows, followed by the wage base and
/// the grand total.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{calculate_comprehensive, format_report};
/// use overtime_engine::config::{RateTable, RoundingMode};
/// use overtime_engine::models::WorkHoursInput;
/// use rust_decimal::Decimal;
///
/// let input = WorkHoursInput {
///     weekday_overtime: "2".to_string(),
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
/// let report = format_report(&result);
/// assert!(report.contains("Weekday overtime (2 h): $266.67"));
/// assert!(report.ends_with("Total: $266.67\n"));
/// ```
pub fn format_report(result: &ComprehensiveResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    for (category, detail) in result.categories.iter() {
        let _ = writeln!(
            out,
            "{} ({} h): ${:.2}",
            category,
            detail.hours.normalize(),
            detail.pay
        );
        for line in &detail.narrative {
            let _ = writeln!(out, "  {}", line);
        }
        if let Some(days) = &detail.per_day_breakdown {
            for row in days {
                let _ = writeln!(
                    out,
                    "  Day {}: {} h = ${:.2}",
                    row.day,
                    row.hours.normalize(),
                    row.pay
                );
            }
        }
    }

    let _ = writeln!(
        out,
        "Hourly rate: ${} | Daily wage: ${} ({})",
        result.hourly_rate.normalize(),
        result.daily_wage.normalize(),
        result.rounding_mode
    );
    let _ = writeln!(out, "Total: ${:.2}", result.total_pay);
    out
}
