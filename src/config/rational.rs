//! Exact-ratio parsing for rate multipliers.
//!
//! Statutory multipliers such as 4/3 have no finite decimal expansion, so
//! settings files may spell them as fraction strings. Plain numbers and
//! decimal strings are accepted as well.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RatioRepr {
    Number(Decimal),
    Text(String),
}

/// Parses a multiplier written as a decimal (`"1.5"`) or a fraction (`"4/3"`).
///
/// Returns `None` for anything else, including a zero denominator.
///
/// # Example
///
/// ```
/// use overtime_engine::config::parse_ratio;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_ratio("2"), Some(Decimal::from(2)));
/// assert_eq!(parse_ratio("8/4"), Some(Decimal::from(2)));
/// assert_eq!(parse_ratio("1/0"), None);
/// ```
pub fn parse_ratio(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    match raw.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = Decimal::from_str(numerator.trim()).ok()?;
            let denominator = Decimal::from_str(denominator.trim()).ok()?;
            numerator.checked_div(denominator)
        }
        None => Decimal::from_str(raw).ok(),
    }
}

fn resolve<E: serde::de::Error>(repr: RatioRepr) -> Result<Decimal, E> {
    match repr {
        RatioRepr::Number(value) => Ok(value),
        RatioRepr::Text(text) => parse_ratio(&text)
            .ok_or_else(|| E::custom(format!("'{}' is not a number or fraction", text))),
    }
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    resolve(RatioRepr::deserialize(deserializer)?)
}

pub(crate) fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RatioRepr>::deserialize(deserializer)?
        .map(resolve::<D::Error>)
        .transpose()
}
