//! Statutory overtime and premium pay engine
//!
//! This crate derives an hourly rate from a monthly salary and prices
//! weekday overtime, rest-day work, statutory holiday work and regular day
//! off work through configurable multiplier brackets, with an itemized
//! audit trail and an advisory daily-hours compliance check.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
