//! Core data models for the overtime engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod work_hours;

pub use calculation_result::{
    AuditStep, AuditWarning, CalculationDetail, CategoryDetails, ComplianceReport,
    ComprehensiveResult, DayBreakdown,
};
pub use work_hours::{ParsedHours, WorkCategory, WorkHoursInput};
