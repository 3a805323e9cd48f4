//! Error types for the overtime engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a pay calculation or
//! while loading and storing settings.

use thiserror::Error;

/// The main error type for the overtime engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently at the boundary.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::InvalidHoursFormat {
///     token: "a".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid hours value: 'a' is not a number");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The monthly salary was zero, negative or not a number.
    #[error("Invalid monthly salary: {value} (must be a number greater than zero)")]
    InvalidSalary {
        /// The rejected salary as supplied.
        value: String,
    },

    /// An hour string contained a token that is not a number.
    #[error("Invalid hours value: '{token}' is not a number")]
    InvalidHoursFormat {
        /// The offending token, trimmed.
        token: String,
    },

    /// An hour value, or the sum of a category's hours, is outside the range
    /// the engine can represent.
    #[error("Hours value '{token}' is too large to calculate with")]
    HoursOutOfRange {
        /// The token whose value or running sum overflowed.
        token: String,
    },

    /// A rate multiplier was not strictly positive.
    #[error("Invalid rate multiplier '{field}': {value} (must be greater than zero)")]
    InvalidRate {
        /// The rate table field that was rejected.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// A calculation was aborted because one of its inputs could not be used.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the failure, including usage examples.
        message: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Settings file could not be written.
    #[error("Failed to write configuration file '{path}': {message}")]
    ConfigWriteError {
        /// The path that could not be written.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// Settings file was written by a newer schema than this engine understands.
    #[error("Unsupported settings version {found} (this engine supports up to {supported})")]
    UnsupportedSettingsVersion {
        /// The version tag found in the file.
        found: u32,
        /// The newest version this engine can read.
        supported: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
