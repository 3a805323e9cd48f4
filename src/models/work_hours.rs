//! Work-hour input models.
//!
//! This module contains the [`WorkCategory`] enum, the raw per-category
//! [`WorkHoursInput`] supplied by callers, and the normalized [`ParsedHours`].

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of premium work an hour string describes.
///
/// # Example
///
/// ```
/// use overtime_engine::models::WorkCategory;
///
/// assert_eq!(WorkCategory::ALL.len(), 4);
/// assert_eq!(WorkCategory::RestDay.label(), "Rest day work");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkCategory {
    /// Overtime on an ordinary working day.
    WeekdayOvertime,
    /// Attendance on a scheduled rest day.
    RestDay,
    /// A statutory holiday worked instead of rested.
    Holiday,
    /// Attendance on a regular (mandatory) day off.
    RegularDayOff,
}

impl WorkCategory {
    /// Every category, in report order.
    pub const ALL: [WorkCategory; 4] = [
        WorkCategory::WeekdayOvertime,
        WorkCategory::RestDay,
        WorkCategory::Holiday,
        WorkCategory::RegularDayOff,
    ];

    /// Human-readable label used in reports and messages.
    pub fn label(&self) -> &'static str {
        match self {
            WorkCategory::WeekdayOvertime => "Weekday overtime",
            WorkCategory::RestDay => "Rest day work",
            WorkCategory::Holiday => "Holiday work",
            WorkCategory::RegularDayOff => "Regular day off work",
        }
    }
}

impl fmt::Display for WorkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw hour strings for each category, plus the emergency flag.
///
/// Each string is empty (category unused), a single number (`"3"`), or a
/// comma-separated list with one number per day (`"9,9,9,9"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkHoursInput {
    /// Weekday overtime hours.
    pub weekday_overtime: String,
    /// Rest-day hours.
    pub rest_day_work: String,
    /// Statutory holiday hours.
    pub holiday_work: String,
    /// Regular day off hours.
    pub regular_day_off_work: String,
    /// Whether weekday overtime was compelled by an emergency.
    pub is_emergency: bool,
}

impl WorkHoursInput {
    /// Returns the raw hour string for `category`.
    pub fn raw(&self, category: WorkCategory) -> &str {
        match category {
            WorkCategory::WeekdayOvertime => &self.weekday_overtime,
            WorkCategory::RestDay => &self.rest_day_work,
            WorkCategory::Holiday => &self.holiday_work,
            WorkCategory::RegularDayOff => &self.regular_day_off_work,
        }
    }
}

/// Hours parsed from one category's input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedHours {
    /// Sum of all days.
    pub total: Decimal,
    /// Hours per day, in input order. Never empty.
    pub per_day: Vec<Decimal>,
}

impl ParsedHours {
    /// Whether the input listed more than one day.
    pub fn is_multi_day(&self) -> bool {
        self.per_day.len() > 1
    }

    /// The largest single-day value and its 1-based day number.
    pub fn max_day(&self) -> (usize, Decimal) {
        self.per_day
            .iter()
            .enumerate()
            .fold((1, Decimal::MIN), |(best_day, best), (index, &hours)| {
                if hours > best {
                    (index + 1, hours)
                } else {
                    (best_day, best)
                }
            })
    }
}
