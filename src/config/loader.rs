//! Settings loading and persistence.
//!
//! This module provides the [`SettingsProvider`] trait the calculation
//! boundary reads from, and [`SettingsStore`], a YAML-backed implementation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{
    RateTable, RateTableUpdate, RoundingMode, SETTINGS_SCHEMA_VERSION, Settings,
};

/// A source of the rate table and rounding policy for a calculation.
///
/// Implementations hand out snapshots: the returned [`RateTable`] is a copy
/// that later settings changes cannot affect.
pub trait SettingsProvider {
    /// Returns the current multiplier table.
    fn rates(&self) -> RateTable;

    /// Returns the current wage-base rounding policy.
    fn rounding_mode(&self) -> RoundingMode;
}

/// Loads, edits and saves engine settings.
///
/// A store is either backed by a YAML file or purely in memory. Mutations
/// stamp `updated_at` but are only written to disk on [`SettingsStore::save`].
///
/// # File Format
///
/// ```text
/// version: 1
/// rounding_mode: ceiling
/// rates:
///   weekday_first_two_hours: "4/3"
///   weekday_next_two_hours: "5/3"
///   weekday_emergency: 2
///   rest_day_first_two_hours: "4/3"
///   rest_day_two_to_eight_hours: "5/3"
///   rest_day_over_eight_hours: "8/3"
///   holiday: 2
///   regular_day_off: 2
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::{SettingsProvider, SettingsStore};
///
/// let store = SettingsStore::load("./config/default.yaml")?;
/// println!("Rounding: {}", store.rounding_mode());
/// # Ok::<(), overtime_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    settings: Settings,
}

impl SettingsStore {
    /// Creates a store holding the statutory defaults, not backed by a file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            settings: Settings::default(),
        }
    }

    /// Loads settings from a YAML file.
    ///
    /// Returns an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file is not valid YAML or holds an invalid rate (`ConfigParseError`)
    /// - The version tag is newer than this engine (`UnsupportedSettingsVersion`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: Settings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        if settings.version > SETTINGS_SCHEMA_VERSION {
            return Err(EngineError::UnsupportedSettingsVersion {
                found: settings.version,
                supported: SETTINGS_SCHEMA_VERSION,
            });
        }

        Ok(Self {
            path: Some(path.to_path_buf()),
            settings,
        })
    }

    /// Loads settings from `path`, or starts from defaults if the file does
    /// not exist yet. Any other load failure is returned.
    pub fn open_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self {
                path: Some(path.to_path_buf()),
                settings: Settings::default(),
            });
        }
        Self::load(path)
    }

    /// Writes the settings to the backing file. In-memory stores do nothing.
    pub fn save(&self) -> EngineResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let path_str = path.display().to_string();

        let content =
            serde_yaml::to_string(&self.settings).map_err(|e| EngineError::ConfigWriteError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        fs::write(path, content).map_err(|e| EngineError::ConfigWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

        info!(path = %path_str, "Settings saved");
        Ok(())
    }

    /// Returns the full settings document.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the backing file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Applies a partial rate update, replacing the table wholesale.
    ///
    /// If the merged table is invalid the stored table is left unchanged.
    pub fn set_rates(&mut self, update: &RateTableUpdate) -> EngineResult<RateTable> {
        let rates = self.settings.rates.with_update(update)?;
        self.settings.rates = rates;
        self.settings.updated_at = Some(Utc::now());
        Ok(rates)
    }

    /// Changes the wage-base rounding policy.
    pub fn set_rounding_mode(&mut self, mode: RoundingMode) {
        self.settings.rounding_mode = mode;
        self.settings.updated_at = Some(Utc::now());
    }

    /// Restores the statutory defaults.
    pub fn reset(&mut self) {
        self.settings = Settings {
            updated_at: Some(Utc::now()),
            ..Settings::default()
        };
        info!("Settings reset to statutory defaults");
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SettingsProvider for SettingsStore {
    fn rates(&self) -> RateTable {
        self.settings.rates
    }

    fn rounding_mode(&self) -> RoundingMode {
        self.settings.rounding_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "overtime_engine_{}_{}.yaml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_load_default_config_file() {
        let store = SettingsStore::load("config/default.yaml").unwrap();
        assert_eq!(store.settings().version, 1);
        assert_eq!(store.rounding_mode(), RoundingMode::Ceiling);
        assert_eq!(store.rates(), RateTable::statutory());
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = SettingsStore::load("/definitely/not/here.yaml");
        assert!(matches!(result, Err(EngineError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_rate() {
        let path = temp_settings_path("invalid_rate");
        fs::write(
            &path,
            "version: 1\nrates:\n  weekday_first_two_hours: 0\n  weekday_next_two_hours: 1\n  \
             weekday_emergency: 2\n  rest_day_first_two_hours: 1\n  rest_day_two_to_eight_hours: 1\n  \
             rest_day_over_eight_hours: 1\n  holiday: 2\n  regular_day_off: 2\n",
        )
        .unwrap();

        let result = SettingsStore::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("weekday_first_two_hours"));
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_newer_version() {
        let path = temp_settings_path("newer_version");
        let mut content = fs::read_to_string("config/default.yaml").unwrap();
        content = content.replacen("version: 1", "version: 99", 1);
        fs::write(&path, content).unwrap();

        let result = SettingsStore::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(EngineError::UnsupportedSettingsVersion { found: 99, supported: 1 })
        ));
    }

    #[test]
    fn test_open_or_default_without_file_uses_defaults() {
        let path = temp_settings_path("absent");
        fs::remove_file(&path).ok();

        let store = SettingsStore::open_or_default(&path).unwrap();
        assert_eq!(store.settings(), &Settings::default());
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn test_set_rates_then_save_and_reload() {
        let path = temp_settings_path("round_trip");
        fs::remove_file(&path).ok();

        let mut store = SettingsStore::open_or_default(&path).unwrap();
        store
            .set_rates(&RateTableUpdate {
                holiday: Some(dec("2.5")),
                ..Default::default()
            })
            .unwrap();
        store.set_rounding_mode(RoundingMode::NearestCent);
        store.save().unwrap();

        let reloaded = SettingsStore::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(reloaded.rates().holiday(), dec("2.5"));
        assert_eq!(reloaded.rates(), store.rates());
        assert_eq!(reloaded.rounding_mode(), RoundingMode::NearestCent);
        assert!(reloaded.settings().updated_at.is_some());
    }

    #[test]
    fn test_failed_set_rates_keeps_previous_table() {
        let mut store = SettingsStore::in_memory();
        let before = store.rates();

        let result = store.set_rates(&RateTableUpdate {
            regular_day_off: Some(dec("-2")),
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(store.rates(), before);
        assert!(store.settings().updated_at.is_none());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut store = SettingsStore::in_memory();
        store
            .set_rates(&RateTableUpdate {
                weekday_emergency: Some(dec("3")),
                ..Default::default()
            })
            .unwrap();
        store.set_rounding_mode(RoundingMode::NearestCent);

        store.reset();

        assert_eq!(store.rates(), RateTable::statutory());
        assert_eq!(store.rounding_mode(), RoundingMode::Ceiling);
        assert!(store.settings().updated_at.is_some());
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_updates() {
        let mut store = SettingsStore::in_memory();
        let snapshot = store.rates();
        store
            .set_rates(&RateTableUpdate {
                holiday: Some(dec("4")),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(snapshot.holiday(), Decimal::from(2));
        assert_eq!(store.rates().holiday(), Decimal::from(4));
    }

    #[test]
    fn test_in_memory_save_is_noop() {
        let store = SettingsStore::in_memory();
        assert!(store.save().is_ok());
        assert!(store.path().is_none());
    }
}
