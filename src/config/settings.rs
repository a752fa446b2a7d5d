//! User settings for fintrack
//!
//! Optional preferences read from `fintrack.json` beside the data file.
//! Every field has a default, so a missing or partial file is fine.

use serde::Deserialize;

use super::paths::TrackerPaths;
use crate::error::FintrackError;
use crate::storage::StorageBackend;

/// Newest settings layout this build understands
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// User settings for fintrack
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Schema version for the settings file
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol appended to printed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Storage backend; inferred from the data file extension when unset
    #[serde(default)]
    pub backend: Option<StorageBackend>,
}

fn default_schema_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            backend: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FintrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FintrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            if settings.schema_version > SETTINGS_SCHEMA_VERSION {
                return Err(FintrackError::Config(format!(
                    "Settings file uses schema version {}, newest supported is {}",
                    settings.schema_version, SETTINGS_SCHEMA_VERSION
                )));
            }

            Ok(settings)
        } else {
            // Defaults are not written back; the settings file stays opt-in
            Ok(Settings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths(temp_dir: &TempDir) -> TrackerPaths {
        TrackerPaths::new(Some(temp_dir.path().join("finance_tracker.json")))
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.backend, None);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_or_create(&temp_paths(&temp_dir)).unwrap();
        assert_eq!(settings.currency_symbol, "$");
        assert!(!temp_dir.path().join("fintrack.json").exists());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::write(
            paths.settings_file(),
            r#"{"schema_version": 1, "currency_symbol": "₽", "backend": "sqlite"}"#,
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "₽");
        assert_eq!(loaded.backend, Some(StorageBackend::Sqlite));
    }

    #[test]
    fn test_newer_schema_version_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"schema_version": 2}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
        assert!(err.to_string().contains("schema version 2"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::write(paths.settings_file(), r#"{"backend": "json"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.backend, Some(StorageBackend::Json));
        assert_eq!(loaded.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = temp_paths(&temp_dir);
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
    }
}
