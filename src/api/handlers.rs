//! Request handlers for the calculation boundary.
//!
//! These functions take raw caller input, resolve rates and rounding policy
//! against a [`SettingsProvider`], run the engine and shape the outcome into
//! a [`CalculationResponse`] or an [`ApiError`].

use std::time::Instant;

use serde_json::error::Category;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_comprehensive, format_report, validate_work_hours};
use crate::config::{RateTable, SettingsProvider};
use crate::error::EngineResult;
use crate::models::ComprehensiveResult;

use super::request::CalculationRequest;
use super::response::{ApiError, CalculationResponse};

/// Engine version reported in every response.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parses a JSON request body and handles it.
///
/// Syntax errors map to `MALFORMED_JSON`; well-formed JSON with missing or
/// mistyped fields maps to `VALIDATION_ERROR`.
///
/// # Example
///
/// ```
/// use overtime_engine::api::calculate_from_json;
/// use overtime_engine::config::SettingsStore;
///
/// let store = SettingsStore::in_memory();
/// let response = calculate_from_json(
///     r#"{"monthly_salary": 24000, "holiday_work": "8"}"#,
///     &store,
/// )
/// .unwrap();
/// assert_eq!(response.result.total_pay, rust_decimal::Decimal::from(1600));
/// ```
pub fn calculate_from_json<P>(body: &str, settings: &P) -> Result<CalculationResponse, ApiError>
where
    P: SettingsProvider + ?Sized,
{
    let request: CalculationRequest = serde_json::from_str(body).map_err(|err| {
        warn!(error = %err, "Rejected calculation request body");
        match err.classify() {
            Category::Data => ApiError::validation_error(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
        }
    })?;
    handle_calculation(&request, settings)
}

/// Handles a parsed calculation request.
///
/// Per-request `rate_table` and `rounding_mode` take precedence over the
/// provider's values.
pub fn handle_calculation<P>(
    request: &CalculationRequest,
    settings: &P,
) -> Result<CalculationResponse, ApiError>
where
    P: SettingsProvider + ?Sized,
{
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let start_time = Instant::now();
    let outcome = run_request(request, settings);

    let result = match outcome {
        Ok(result) => result,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            return Err(err.into());
        }
    };

    let compliance = request
        .include_compliance
        .then(|| validate_work_hours(&request.work_hours()));
    let report = request.include_report.then(|| format_report(&result));

    info!(
        correlation_id = %correlation_id,
        total_pay = %result.total_pay,
        compliant = compliance.as_ref().map(|c| c.is_valid),
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    Ok(CalculationResponse {
        engine_version: ENGINE_VERSION.to_string(),
        result,
        compliance,
        report,
    })
}

fn run_request<P>(request: &CalculationRequest, settings: &P) -> EngineResult<ComprehensiveResult>
where
    P: SettingsProvider + ?Sized,
{
    let salary = request.monthly_salary.resolve()?;
    let rates = match request.rate_table {
        Some(values) => RateTable::new(values)?,
        None => settings.rates(),
    };
    let rounding_mode = request
        .rounding_mode
        .unwrap_or_else(|| settings.rounding_mode());
    calculate_comprehensive(salary, &request.work_hours(), &rates, rounding_mode)
}
