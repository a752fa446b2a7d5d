//! Display formatting for terminal output
//!
//! Turns expenses, categories and reports into plain strings; printing is
//! left to the command handlers.

pub mod category;
pub mod expense;
pub mod report;

pub use category::{format_category_list, format_unknown_category};
pub use expense::format_expense_list;
pub use report::{format_amount, format_category_report};
