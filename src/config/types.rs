//! Configuration types for the overtime engine.
//!
//! This module contains the rate table, the rounding policy and the
//! persisted settings document that bundles them.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::rational;

/// The newest settings schema version this engine reads and writes.
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

fn ratio(numerator: i64, denominator: i64) -> Decimal {
    Decimal::from(numerator) / Decimal::from(denominator)
}

/// How the wage base is rounded when derived from a monthly salary.
///
/// Only the hourly rate and daily wage are affected; bracket pay is always
/// rounded to the cent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoundingMode {
    /// Round up to the next whole currency unit.
    #[default]
    Ceiling,
    /// Round half-up to two decimal places.
    NearestCent,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Ceiling => write!(f, "ceiling"),
            RoundingMode::NearestCent => write!(f, "nearest-cent"),
        }
    }
}

/// Unvalidated multiplier values, as written in a settings file.
///
/// Each value may be a decimal number or a fraction string such as `"4/3"`.
/// Convert with [`RateTable::new`] to obtain a validated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateValues {
    /// Weekday overtime, first two hours.
    #[serde(deserialize_with = "rational::deserialize")]
    pub weekday_first_two_hours: Decimal,
    /// Weekday overtime from the third hour on.
    #[serde(deserialize_with = "rational::deserialize")]
    pub weekday_next_two_hours: Decimal,
    /// Flat weekday overtime multiplier under the emergency override.
    #[serde(deserialize_with = "rational::deserialize")]
    pub weekday_emergency: Decimal,
    /// Rest-day work, first two hours.
    #[serde(deserialize_with = "rational::deserialize")]
    pub rest_day_first_two_hours: Decimal,
    /// Rest-day work, hours three to eight.
    #[serde(deserialize_with = "rational::deserialize")]
    pub rest_day_two_to_eight_hours: Decimal,
    /// Rest-day work beyond the eighth hour.
    #[serde(deserialize_with = "rational::deserialize")]
    pub rest_day_over_eight_hours: Decimal,
    /// Statutory holiday worked.
    #[serde(deserialize_with = "rational::deserialize")]
    pub holiday: Decimal,
    /// Regular (mandatory) day off worked.
    #[serde(deserialize_with = "rational::deserialize")]
    pub regular_day_off: Decimal,
}

/// The validated, immutable table of eight premium multipliers.
///
/// A table is only ever replaced wholesale: [`RateTable::with_update`] returns
/// a new table and leaves `self` untouched.
///
/// # Example
///
/// ```
/// use overtime_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::default();
/// assert_eq!(table.holiday(), Decimal::from(2));
/// assert_eq!(table.weekday_emergency(), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateValues", into = "RateValues")]
pub struct RateTable {
    values: RateValues,
}

impl RateTable {
    /// Validates `values` and builds a table.
    ///
    /// Fails with [`EngineError::InvalidRate`] naming the first field that is
    /// not strictly positive.
    pub fn new(values: RateValues) -> EngineResult<Self> {
        let table = Self { values };
        table.validate()?;
        Ok(table)
    }

    /// The statutory default schedule: 4/3, 5/3 and 2 on weekdays; 4/3, 5/3
    /// and 8/3 on rest days; 2 for holidays and regular days off.
    pub fn statutory() -> Self {
        Self {
            values: RateValues {
                weekday_first_two_hours: ratio(4, 3),
                weekday_next_two_hours: ratio(5, 3),
                weekday_emergency: Decimal::from(2),
                rest_day_first_two_hours: ratio(4, 3),
                rest_day_two_to_eight_hours: ratio(5, 3),
                rest_day_over_eight_hours: ratio(8, 3),
                holiday: Decimal::from(2),
                regular_day_off: Decimal::from(2),
            },
        }
    }

    /// Checks that every multiplier is greater than zero.
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in self.fields() {
            if value <= Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    value: value.normalize().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns a new table with `update` applied on top of this one.
    ///
    /// The merged table is validated as a whole; on failure `self` is
    /// unaffected.
    pub fn with_update(&self, update: &RateTableUpdate) -> EngineResult<Self> {
        let current = self.values;
        Self::new(RateValues {
            weekday_first_two_hours: update
                .weekday_first_two_hours
                .unwrap_or(current.weekday_first_two_hours),
            weekday_next_two_hours: update
                .weekday_next_two_hours
                .unwrap_or(current.weekday_next_two_hours),
            weekday_emergency: update
                .weekday_emergency
                .unwrap_or(current.weekday_emergency),
            rest_day_first_two_hours: update
                .rest_day_first_two_hours
                .unwrap_or(current.rest_day_first_two_hours),
            rest_day_two_to_eight_hours: update
                .rest_day_two_to_eight_hours
                .unwrap_or(current.rest_day_two_to_eight_hours),
            rest_day_over_eight_hours: update
                .rest_day_over_eight_hours
                .unwrap_or(current.rest_day_over_eight_hours),
            holiday: update.holiday.unwrap_or(current.holiday),
            regular_day_off: update.regular_day_off.unwrap_or(current.regular_day_off),
        })
    }

    /// Field names paired with their values, in schedule order.
    pub fn fields(&self) -> [(&'static str, Decimal); 8] {
        let v = &self.values;
        [
            ("weekday_first_two_hours", v.weekday_first_two_hours),
            ("weekday_next_two_hours", v.weekday_next_two_hours),
            ("weekday_emergency", v.weekday_emergency),
            ("rest_day_first_two_hours", v.rest_day_first_two_hours),
            ("rest_day_two_to_eight_hours", v.rest_day_two_to_eight_hours),
            ("rest_day_over_eight_hours", v.rest_day_over_eight_hours),
            ("holiday", v.holiday),
            ("regular_day_off", v.regular_day_off),
        ]
    }

    /// Returns the raw values.
    pub fn values(&self) -> RateValues {
        self.values
    }

    /// Weekday overtime multiplier for the first two hours.
    pub fn weekday_first_two_hours(&self) -> Decimal {
        self.values.weekday_first_two_hours
    }

    /// Weekday overtime multiplier from the third hour on.
    pub fn weekday_next_two_hours(&self) -> Decimal {
        self.values.weekday_next_two_hours
    }

    /// Flat emergency weekday overtime multiplier.
    pub fn weekday_emergency(&self) -> Decimal {
        self.values.weekday_emergency
    }

    /// Rest-day multiplier for the first two hours.
    pub fn rest_day_first_two_hours(&self) -> Decimal {
        self.values.rest_day_first_two_hours
    }

    /// Rest-day multiplier for hours three to eight.
    pub fn rest_day_two_to_eight_hours(&self) -> Decimal {
        self.values.rest_day_two_to_eight_hours
    }

    /// Rest-day multiplier beyond the eighth hour.
    pub fn rest_day_over_eight_hours(&self) -> Decimal {
        self.values.rest_day_over_eight_hours
    }

    /// Statutory holiday multiplier.
    pub fn holiday(&self) -> Decimal {
        self.values.holiday
    }

    /// Regular day off multiplier.
    pub fn regular_day_off(&self) -> Decimal {
        self.values.regular_day_off
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::statutory()
    }
}

impl TryFrom<RateValues> for RateTable {
    type Error = EngineError;

    fn try_from(values: RateValues) -> EngineResult<Self> {
        Self::new(values)
    }
}

impl From<RateTable> for RateValues {
    fn from(table: RateTable) -> Self {
        table.values
    }
}

/// A partial rate table; `None` fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateTableUpdate {
    /// See [`RateValues::weekday_first_two_hours`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub weekday_first_two_hours: Option<Decimal>,
    /// See [`RateValues::weekday_next_two_hours`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub weekday_next_two_hours: Option<Decimal>,
    /// See [`RateValues::weekday_emergency`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub weekday_emergency: Option<Decimal>,
    /// See [`RateValues::rest_day_first_two_hours`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub rest_day_first_two_hours: Option<Decimal>,
    /// See [`RateValues::rest_day_two_to_eight_hours`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub rest_day_two_to_eight_hours: Option<Decimal>,
    /// See [`RateValues::rest_day_over_eight_hours`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub rest_day_over_eight_hours: Option<Decimal>,
    /// See [`RateValues::holiday`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub holiday: Option<Decimal>,
    /// See [`RateValues::regular_day_off`].
    #[serde(default, deserialize_with = "rational::deserialize_option")]
    pub regular_day_off: Option<Decimal>,
}

/// The persisted settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version tag.
    pub version: u32,
    /// Wage-base rounding policy.
    #[serde(default)]
    pub rounding_mode: RoundingMode,
    /// The multiplier table.
    pub rates: RateTable,
    /// When the settings were last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_SCHEMA_VERSION,
            rounding_mode: RoundingMode::default(),
            rates: RateTable::statutory(),
            updated_at: None,
        }
    }
}
