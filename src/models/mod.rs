//! Core data models for fintrack
//!
//! This module contains the data structures of the expense domain:
//! categories, expenses, periods and per-category statistics.

pub mod category;
pub mod expense;
pub mod ids;
pub mod period;
pub mod record;
pub mod stats;

pub use category::{Category, DEFAULT_CATEGORIES};
pub use expense::Expense;
pub use ids::{CategoryId, ExpenseId};
pub use period::Period;
pub use record::{ModelError, Record, DATE_FORMAT};
pub use stats::{finalize_stats, CategoryStat};
