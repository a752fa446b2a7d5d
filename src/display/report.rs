//! Report formatting utilities for terminal output
//!
//! Provides the category report layout and the small helpers the other
//! display modules share.

use crate::reports::CategoryReport;

/// Timestamp layout used when printing a report
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an amount with two decimals, followed by the currency symbol
pub fn format_amount(amount: f64, currency: &str) -> String {
    if currency.is_empty() {
        format!("{:.2}", amount)
    } else {
        format!("{:.2} {}", amount, currency)
    }
}

/// Format a section header line, preceded by a blank line
pub fn section_header(title: &str) -> String {
    format!("\n=== {} ===\n", title)
}

/// Format a category report for the terminal
pub fn format_category_report(report: &CategoryReport, currency: &str) -> String {
    let mut output = section_header("EXPENSE REPORT");
    output.push_str(&format!("Period: {}\n", report.period));
    output.push_str(&format!(
        "Generated: {}\n",
        report.generated_at.format(TIMESTAMP_FORMAT)
    ));
    output.push_str("\n--- By category ---\n");

    for category in &report.categories {
        output.push_str(&format!("{}:\n", category.category_name));
        output.push_str(&format!(
            "  Amount: {}\n",
            format_amount(category.total_amount, currency)
        ));
        output.push_str(&format!("  Transactions: {}\n", category.transaction_count));
        output.push('\n');
    }

    output.push_str(&format!(
        "Total expenses: {}\n",
        format_amount(report.total_expenses, currency)
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{Clock, FixedClock};
    use crate::models::{CategoryId, CategoryStat, Period};
    use chrono::NaiveDate;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0, "$"), "100.00 $");
        assert_eq!(format_amount(7.0, ""), "7.00");
        assert_eq!(format_amount(-3.5, "€"), "-3.50 €");
    }

    #[test]
    fn test_report_layout() {
        let clock = FixedClock::at_date(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        let report = CategoryReport::from_stats(
            Period::Month,
            clock.now(),
            vec![CategoryStat {
                category_id: CategoryId::new(1),
                category_name: "Food".into(),
                transaction_count: 2,
                total_amount: 42.5,
            }],
        );

        let output = format_category_report(&report, "$");

        assert!(output.starts_with("\n=== EXPENSE REPORT ===\nPeriod: month\n"));
        assert!(output.contains("Generated: 2025-03-15 12:00:00\n"));
        assert!(output.contains("Food:\n  Amount: 42.50 $\n  Transactions: 2\n\n"));
        assert!(output.ends_with("Total expenses: 42.50 $\n"));
    }
}
