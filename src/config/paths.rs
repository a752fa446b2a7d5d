//! Path management for fintrack
//!
//! ## Path Resolution Order
//!
//! 1. An explicit `--data-file` path (clap also reads `FINTRACK_DATA_FILE`)
//! 2. `finance_tracker.json` in the current working directory
//!
//! The settings file always lives next to the data file.

use std::path::{Path, PathBuf};

use crate::error::FintrackError;

/// Default data file name, created in the working directory
pub const DEFAULT_DATA_FILE: &str = "finance_tracker.json";

/// Settings file name, resolved relative to the data file's directory
pub const SETTINGS_FILE: &str = "fintrack.json";

/// Manages all paths used by fintrack
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// The JSON document or SQLite database holding all expenses
    data_file: PathBuf,
}

impl TrackerPaths {
    /// Resolve paths from an optional explicit data file
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self {
            data_file: data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory containing the data file (`.` for bare file names)
    pub fn data_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir().join(SETTINGS_FILE)
    }

    /// Ensure the directory holding the data file exists
    pub fn ensure_data_dir(&self) -> Result<(), FintrackError> {
        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FintrackError::Io(format!("Failed to create data directory: {}", e)))
    }

    /// Check if the data file has been created
    pub fn is_initialized(&self) -> bool {
        self.data_file.exists()
    }
}

impl Default for TrackerPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_data_file() {
        let paths = TrackerPaths::default();
        assert_eq!(paths.data_file(), Path::new(DEFAULT_DATA_FILE));
        assert_eq!(paths.data_dir(), PathBuf::from("."));
        assert_eq!(paths.settings_file(), PathBuf::from(".").join(SETTINGS_FILE));
    }

    #[test]
    fn test_custom_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("money.db");
        let paths = TrackerPaths::new(Some(file.clone()));

        assert_eq!(paths.data_file(), file.as_path());
        assert_eq!(paths.data_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join(SETTINGS_FILE));
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_ensure_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("data.json");
        let paths = TrackerPaths::new(Some(nested));

        paths.ensure_data_dir().unwrap();
        assert!(temp_dir.path().join("a").join("b").exists());
    }
}
