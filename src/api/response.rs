//! Response types for the calculation boundary.
//!
//! This module defines the success payload and the single error shape the
//! presentation layer renders.

use serde::{Deserialize, Serialize};

use crate::calculation::HOURS_USAGE_EXAMPLES;
use crate::error::EngineError;
use crate::models::{ComplianceReport, ComprehensiveResult};

/// Successful calculation payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The priced, itemized result.
    pub result: ComprehensiveResult,
    /// Advisory daily-hours check, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceReport>,
    /// Rendered text report, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

/// Boundary error response structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

impl From<EngineError> for ApiError {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidSalary { .. } => ApiError::with_details(
                "INVALID_SALARY",
                message,
                "Enter the monthly salary as a positive number, e.g. 36000",
            ),
            EngineError::InvalidHoursFormat { .. } => {
                ApiError::with_details("INVALID_HOURS_FORMAT", message, HOURS_USAGE_EXAMPLES)
            }
            EngineError::HoursOutOfRange { .. } => {
                ApiError::with_details("HOURS_OUT_OF_RANGE", message, HOURS_USAGE_EXAMPLES)
            }
            EngineError::InvalidRate { .. } => ApiError::with_details(
                "INVALID_RATE",
                message,
                "Every multiplier must be a positive number or fraction, e.g. 2 or \"4/3\"",
            ),
            EngineError::CalculationError { .. } => ApiError::new("CALCULATION_ERROR", message),
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::ConfigWriteError { .. }
            | EngineError::UnsupportedSettingsVersion { .. } => {
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_salary_maps_to_code() {
        let api_error: ApiError = EngineError::InvalidSalary {
            value: "0".to_string(),
        }
        .into();
        assert_eq!(api_error.code, "INVALID_SALARY");
        assert!(api_error.message.contains("0"));
        assert!(api_error.details.is_some());
    }

    #[test]
    fn test_hours_format_error_carries_usage_examples() {
        let api_error: ApiError = EngineError::InvalidHoursFormat {
            token: "a".to_string(),
        }
        .into();
        assert_eq!(api_error.code, "INVALID_HOURS_FORMAT");
        assert!(api_error.details.unwrap().contains("9,9,9,9"));
    }

    #[test]
    fn test_hours_out_of_range_maps_to_code() {
        let api_error: ApiError = EngineError::HoursOutOfRange {
            token: "99999999999999999999999999999".to_string(),
        }
        .into();
        assert_eq!(api_error.code, "HOURS_OUT_OF_RANGE");
        assert!(api_error.details.is_some());
    }

    #[test]
    fn test_config_errors_share_code() {
        let api_error: ApiError = EngineError::UnsupportedSettingsVersion {
            found: 3,
            supported: 1,
        }
        .into();
        assert_eq!(api_error.code, "CONFIG_ERROR");
        assert!(api_error.details.unwrap().contains("version 3"));
    }
}
