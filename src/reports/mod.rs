//! Reports module for fintrack
//!
//! Provides the per-category spending report and its generator.

pub mod category;
pub mod generator;

pub use category::{CategoryReport, ReportFormat};
pub use generator::ReportGenerator;
