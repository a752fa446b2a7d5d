//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Data file and settings file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
