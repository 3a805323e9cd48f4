//! Configuration loading and management for the overtime engine.
//!
//! This module provides the validated [`RateTable`], the wage-base
//! [`RoundingMode`], and a YAML-backed [`SettingsStore`] that persists both.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::{SettingsProvider, SettingsStore};
//!
//! let store = SettingsStore::load("./config/default.yaml").unwrap();
//! println!("Holiday multiplier: {}", store.rates().holiday());
//! ```

mod loader;
mod rational;
mod types;

pub use loader::{SettingsProvider, SettingsStore};
pub use rational::parse_ratio;
pub use types::{
    RateTable, RateTableUpdate, RateValues, RoundingMode, SETTINGS_SCHEMA_VERSION, Settings,
};
