//! Expense CLI commands
//!
//! Implements `add`, `list` and `delete`.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_expense_list, format_unknown_category};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Category, ExpenseId, Period, DATE_FORMAT};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category name (case-insensitive)
    #[arg(short, long)]
    pub category: String,

    /// Amount spent
    #[arg(short, long, allow_negative_numbers = true)]
    pub amount: f64,

    /// What the money was spent on
    #[arg(short, long)]
    pub description: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,
}

/// Arguments for `list`
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Period to show
    #[arg(short, long, value_enum, default_value_t = Period::Month)]
    pub period: Period,
}

/// Arguments for `delete`
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Id of the expense to remove
    #[arg(short, long)]
    pub id: i64,
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD format.", s))
}

/// Find a category by name, ignoring case
pub fn resolve_category<'a>(categories: &'a [Category], name: &str) -> FintrackResult<&'a Category> {
    categories
        .iter()
        .find(|c| c.matches_name(name))
        .ok_or_else(|| FintrackError::category_not_found(name.trim()))
}

/// Reject amounts that cannot be stored as a JSON number
pub fn validate_amount(amount: f64) -> FintrackResult<f64> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(FintrackError::Validation(format!(
            "Amount must be a finite number, got {}",
            amount
        )))
    }
}

/// Handle the `add` command
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> FintrackResult<()> {
    let amount = match validate_amount(args.amount) {
        Ok(amount) => amount,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    let categories = storage.list_categories();
    let category = match resolve_category(&categories, &args.category) {
        Ok(category) => category,
        Err(e) => {
            print!("{}", format_unknown_category(&e, &categories));
            return Ok(());
        }
    };

    if storage.add_expense(category.id, amount, &args.description, args.date) {
        println!(
            "Expense added: {} - {}",
            args.description,
            format_amount(amount, &settings.currency_symbol)
        );
    } else {
        println!("Failed to add expense");
    }

    Ok(())
}

/// Handle the `list` command
pub fn handle_list_command(storage: &Storage, settings: &Settings, args: ListArgs) -> FintrackResult<()> {
    let expenses = storage.list_expenses(args.period);
    let categories = storage.list_categories();

    print!(
        "{}",
        format_expense_list(&expenses, &categories, args.period, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle the `delete` command
pub fn handle_delete_command(storage: &Storage, args: DeleteArgs) -> FintrackResult<()> {
    let id = ExpenseId::new(args.id);

    if storage.delete_expense(id) {
        println!("Expense with ID {} deleted", id);
    } else {
        println!("{}", FintrackError::expense_not_found(id.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2025").is_err());
    }

    #[test]
    fn test_resolve_category_ignores_case() {
        let categories = Category::defaults();
        assert_eq!(resolve_category(&categories, "fOOd").unwrap().name, "Food");
        assert_eq!(resolve_category(&categories, " health ").unwrap().name, "Health");
        assert!(resolve_category(&categories, "Pets").unwrap_err().is_not_found());
    }

    #[test]
    fn test_validate_amount() {
        assert_eq!(validate_amount(12.5).unwrap(), 12.5);
        assert_eq!(validate_amount(-3.0).unwrap(), -3.0);
        assert!(validate_amount(f64::NAN).unwrap_err().is_validation());
        assert!(validate_amount(f64::INFINITY).unwrap_err().is_validation());
    }
}
