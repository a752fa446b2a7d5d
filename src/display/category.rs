//! Category display formatting

use crate::error::FintrackError;
use crate::models::Category;

use super::report::section_header;

/// Format the category names as a bulleted list under a header
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = section_header("EXPENSE CATEGORIES");
    output.push_str(&format_names(categories));
    output
}

/// Message for a category lookup that failed, listing the valid names
pub fn format_unknown_category(error: &FintrackError, categories: &[Category]) -> String {
    let mut output = format!("{}\nAvailable categories:\n", error);
    output.push_str(&format_names(categories));
    output
}

fn format_names(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("  - {}\n", c.name))
        .collect()
}
