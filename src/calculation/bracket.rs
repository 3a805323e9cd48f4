//! Shared pricing for hour brackets.
//!
//! Each calculator splits its hours into tiers and hands them here. Tier
//! subtotals are kept at full precision; only the final sum is rounded.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, CalculationDetail};

use super::money::{display_amount, display_multiplier, round_to_cent};

/// One priced slice of a day's hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BracketTier {
    pub rule_id: &'static str,
    pub rule_name: &'static str,
    pub hours: Decimal,
    pub multiplier: Decimal,
}

pub(crate) fn pay_overflow(rule_name: &str) -> EngineError {
    EngineError::CalculationError {
        message: format!("{}: pay is too large to represent", rule_name),
    }
}

/// Prices `tiers` at `hourly_rate`, skipping tiers with no hours.
///
/// Fails with [`EngineError::CalculationError`] if a subtotal or the sum
/// overflows.
pub(crate) fn price_tiers(
    total_hours: Decimal,
    hourly_rate: Decimal,
    tiers: &[BracketTier],
) -> EngineResult<CalculationDetail> {
    let mut narrative = Vec::new();
    let mut audit_steps = Vec::new();
    let mut pay = Decimal::ZERO;

    for tier in tiers.iter().filter(|tier| tier.hours > Decimal::ZERO) {
        let subtotal = tier
            .hours
            .checked_mul(hourly_rate)
            .and_then(|amount| amount.checked_mul(tier.multiplier))
            .ok_or_else(|| pay_overflow(tier.rule_name))?;
        pay = pay
            .checked_add(subtotal)
            .ok_or_else(|| pay_overflow(tier.rule_name))?;

        let reasoning = format!(
            "{}: {} h × ${} × {} = ${}",
            tier.rule_name,
            tier.hours.normalize(),
            hourly_rate.normalize(),
            display_multiplier(tier.multiplier),
            display_amount(subtotal)
        );

        audit_steps.push(AuditStep {
            step_number: audit_steps.len() as u32 + 1,
            rule_id: tier.rule_id.to_string(),
            rule_name: tier.rule_name.to_string(),
            input: serde_json::json!({
                "hours": tier.hours.normalize().to_string(),
                "hourly_rate": hourly_rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "multiplier": tier.multiplier.normalize().to_string(),
                "amount": subtotal.normalize().to_string()
            }),
            reasoning: reasoning.clone(),
        });
        narrative.push(reasoning);
    }

    Ok(CalculationDetail {
        hours: total_hours,
        pay: round_to_cent(pay),
        narrative,
        per_day_breakdown: None,
        audit_steps,
    })
}

/// Hours of `hours` falling in the half-open band `(lower, upper]`.
pub(crate) fn hours_between(hours: Decimal, lower: Decimal, upper: Option<Decimal>) -> Decimal {
    let capped = match upper {
        Some(upper) if hours > upper => upper,
        _ => hours,
    };
    (capped - lower).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hours_between_bands() {
        assert_eq!(hours_between(dec("3"), Decimal::ZERO, Some(dec("2"))), dec("2"));
        assert_eq!(hours_between(dec("3"), dec("2"), Some(dec("4"))), dec("1"));
        assert_eq!(hours_between(dec("3"), dec("4"), None), Decimal::ZERO);
        assert_eq!(hours_between(dec("6.5"), dec("4"), None), dec("2.5"));
    }

    #[test]
    fn test_price_tiers_skips_empty_tiers_and_numbers_steps() {
        let tiers = [
            BracketTier {
                rule_id: "a",
                rule_name: "A",
                hours: dec("1"),
                multiplier: dec("1.5"),
            },
            BracketTier {
                rule_id: "b",
                rule_name: "B",
                hours: Decimal::ZERO,
                multiplier: dec("2"),
            },
            BracketTier {
                rule_id: "c",
                rule_name: "C",
                hours: dec("2"),
                multiplier: dec("2"),
            },
        ];

        let detail = price_tiers(dec("3"), dec("10"), &tiers).unwrap();

        assert_eq!(detail.pay, dec("55"));
        assert_eq!(detail.narrative.len(), 2);
        assert_eq!(detail.audit_steps[0].step_number, 1);
        assert_eq!(detail.audit_steps[1].step_number, 2);
        assert_eq!(detail.audit_steps[1].rule_id, "c");
        assert_eq!(detail.narrative[0], "A: 1 h × $10 × 1.5 = $15.00");
    }

    #[test]
    fn test_price_tiers_rounds_only_the_sum() {
        // Each tier alone rounds to 0.00; together they round to 0.01
        let third = Decimal::from(1) / Decimal::from(300);
        let tiers = [
            BracketTier {
                rule_id: "a",
                rule_name: "A",
                hours: dec("1"),
                multiplier: third,
            },
            BracketTier {
                rule_id: "b",
                rule_name: "B",
                hours: dec("1"),
                multiplier: third,
            },
        ];

        let detail = price_tiers(dec("2"), dec("1"), &tiers).unwrap();
        assert_eq!(detail.pay, dec("0.01"));
    }

    #[test]
    fn test_price_tiers_reports_overflow() {
        let tiers = [BracketTier {
            rule_id: "a",
            rule_name: "Holiday work, all hours",
            hours: Decimal::MAX,
            multiplier: dec("2"),
        }];

        match price_tiers(Decimal::MAX, dec("100"), &tiers) {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.starts_with("Holiday work, all hours"));
            }
            other => panic!("expected CalculationError, got {:?}", other),
        }
    }
}
