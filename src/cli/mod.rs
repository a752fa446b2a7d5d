//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with storage and reports.
//!
//! Domain failures (unknown category, unknown id, a failed write) are printed
//! as one line and the handler still returns `Ok`.

pub mod category;
pub mod expense;
pub mod report;

pub use category::handle_categories_command;
pub use expense::{
    handle_add_command, handle_delete_command, handle_list_command, AddArgs, DeleteArgs, ListArgs,
};
pub use report::{handle_report_command, ReportArgs};
