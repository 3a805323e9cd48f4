//! Boundary contract for the overtime engine.
//!
//! Callers hand in a [`CalculationRequest`] (or its JSON text) together with
//! a settings provider and get back either a [`CalculationResponse`] or a
//! single [`ApiError`] shape. No transport is involved.

mod handlers;
mod request;
mod response;

pub use handlers::{ENGINE_VERSION, calculate_from_json, handle_calculation};
pub use request::{CalculationRequest, SalaryInput};
pub use response::{ApiError, CalculationResponse};
