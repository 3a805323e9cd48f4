//! Calculation logic for the overtime engine.
//!
//! This module contains all the calculation functions for determining
//! premium pay: wage-base derivation, hour-string parsing, the weekday,
//! rest-day and holiday brackets, per-day aggregation, the advisory
//! compliance check, the comprehensive calculation and report rendering.

mod aggregator;
mod bracket;
mod compliance;
mod comprehensive;
mod holiday_pay;
mod hours_parser;
mod money;
mod report;
mod rest_day_overtime;
mod wage_base;
mod weekday_overtime;

pub use aggregator::{BracketFlags, BracketFn, bracket_for, compute_category};
pub use compliance::{ABSOLUTE_DAILY_LIMIT, recommended_daily_limit, validate_work_hours};
pub use comprehensive::{HOURS_USAGE_EXAMPLES, calculate_comprehensive};
pub use holiday_pay::{HolidayKind, calculate_holiday_pay};
pub use hours_parser::parse_hours;
pub use money::round_to_cent;
pub use report::format_report;
pub use rest_day_overtime::{
    REST_DAY_TIER_1_THRESHOLD, REST_DAY_TIER_2_THRESHOLD, calculate_rest_day_overtime,
};
pub use wage_base::{
    MONTHLY_DAYS_DIVISOR, MONTHLY_HOURS_DIVISOR, WageBase, daily_wage, derive_wage_base,
    hourly_rate, parse_salary, validate_salary,
};
pub use weekday_overtime::{
    WEEKDAY_OT_TIER_1_THRESHOLD, WEEKDAY_OT_TIER_2_THRESHOLD, calculate_weekday_overtime,
};
