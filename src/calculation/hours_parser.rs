//! Hour-string parsing.
//!
//! Callers supply hours as text: empty for an unused category, one number,
//! or a comma-separated list with one number per day.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ParsedHours;

/// Whether `token` is `["-"] digits ["." digits]`.
fn is_hours_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    all_digits(whole) && fraction.is_none_or(all_digits)
}

fn parse_token(token: &str) -> EngineResult<Decimal> {
    let token = token.trim();
    if !is_hours_literal(token) {
        return Err(EngineError::InvalidHoursFormat {
            token: token.to_string(),
        });
    }
    Decimal::from_str(token).map_err(|_| EngineError::HoursOutOfRange {
        token: token.to_string(),
    })
}

/// Parses a raw hour string.
///
/// Returns `Ok(None)` for empty or whitespace-only input. Zero and negative
/// values are accepted here; the calculators price them at zero.
///
/// # Errors
///
/// - [`EngineError::InvalidHoursFormat`] naming the first token that is not
///   a plain decimal such as `3` or `-2.5`, including an empty token between
///   two commas
/// - [`EngineError::HoursOutOfRange`] if a token or the running total does
///   not fit in a [`Decimal`]
///
/// # Examples
///
/// ```
/// use overtime_engine::calculation::parse_hours;
/// use rust_decimal::Decimal;
///
/// let parsed = parse_hours("9, 9,9,9").unwrap().unwrap();
/// assert_eq!(parsed.total, Decimal::from(36));
/// assert_eq!(parsed.per_day.len(), 4);
///
/// assert!(parse_hours("   ").unwrap().is_none());
/// assert!(parse_hours("3, a").is_err());
/// ```
pub fn parse_hours(raw: &str) -> EngineResult<Option<ParsedHours>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    let per_day = tokens
        .iter()
        .map(|token| parse_token(token))
        .collect::<EngineResult<Vec<Decimal>>>()?;

    let mut total = Decimal::ZERO;
    for (token, hours) in tokens.iter().zip(&per_day) {
        total = total
            .checked_add(*hours)
            .ok_or_else(|| EngineError::HoursOutOfRange {
                token: token.to_string(),
            })?;
    }

    Ok(Some(ParsedHours { total, per_day }))
}
