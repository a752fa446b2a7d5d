//! Expense display formatting
//!
//! Renders the `list` view: one `date | category | amount | description` row
//! per expense followed by the total.

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Expense, Period};

use super::report::{format_amount, section_header};

/// Name shown for an expense whose category no longer exists
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Format a single expense row
pub fn format_expense_row(expense: &Expense, category_name: &str, currency: &str) -> String {
    format!(
        "{} | {:15} | {:>8.2}{} | {}",
        expense.date_string(),
        category_name,
        expense.amount,
        currency_suffix(currency),
        expense.description
    )
}

/// Format the expenses of `period` with a trailing total
pub fn format_expense_list(
    expenses: &[Expense],
    categories: &[Category],
    period: Period,
    currency: &str,
) -> String {
    if expenses.is_empty() {
        return format!("No expenses found for the selected period ({})\n", period);
    }

    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    let mut output = String::new();
    output.push_str(&section_header(&format!(
        "EXPENSES ({})",
        period.as_str().to_uppercase()
    )));

    let mut total = 0.0;
    for expense in expenses {
        let name = names
            .get(&expense.category_id)
            .copied()
            .unwrap_or(UNKNOWN_CATEGORY);
        output.push_str(&format_expense_row(expense, name, currency));
        output.push('\n');
        total += expense.amount;
    }

    output.push_str(&format!(
        "\nTotal expenses: {}\n",
        format_amount(total, currency)
    ));
    output
}

fn currency_suffix(currency: &str) -> String {
    if currency.is_empty() {
        String::new()
    } else {
        format!(" {}", currency)
    }
}
