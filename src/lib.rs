//! fintrack - personal expense tracker
//!
//! This library provides the core functionality for the fintrack command
//! line tool. Expenses are recorded against six fixed categories, listed by
//! period and summarized into per-category reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file and settings paths
//! - `error`: Custom error types
//! - `models`: Categories, expenses, periods and statistics
//! - `storage`: JSON and SQLite backends behind a fail-soft coordinator
//! - `reports`: Category report generation and export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `interrupt`: Ctrl-C exit handling
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::clock::SystemClock;
//! use fintrack::config::paths::TrackerPaths;
//! use fintrack::storage::{Storage, StorageBackend};
//!
//! let paths = TrackerPaths::new(None);
//! let storage = Storage::open(&paths, StorageBackend::Json, Box::new(SystemClock))?;
//! let expenses = storage.list_expenses(fintrack::models::Period::Month);
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod interrupt;
pub mod logging;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
