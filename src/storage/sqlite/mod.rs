//! SQLite backend
//!
//! Two tables, `categories(id, name UNIQUE)` and
//! `expenses(id AUTOINCREMENT, category_id, amount, description, date)`.
//! A connection is opened per operation and dropped when it returns.

mod queries;
mod schema;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::error::FintrackResult;
use crate::models::{finalize_stats, Category, CategoryId, CategoryStat, Expense, ExpenseId, Period};

use super::ExpenseStore;

pub use schema::init_schema;

/// Store backed by a single SQLite database file
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Create a store for the database at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn connect(&self) -> FintrackResult<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}

impl ExpenseStore for SqliteStore {
    fn initialize(&self) -> FintrackResult<()> {
        let conn = self.connect()?;
        init_schema(&conn)?;
        Ok(())
    }

    fn insert_expense(
        &self,
        category_id: CategoryId,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> FintrackResult<ExpenseId> {
        let conn = self.connect()?;
        Ok(queries::insert_expense(
            &conn,
            category_id,
            amount,
            description,
            date,
        )?)
    }

    fn expenses(&self, period: Period, today: NaiveDate) -> FintrackResult<Vec<Expense>> {
        let conn = self.connect()?;
        Ok(queries::get_expenses(&conn, period, today)?)
    }

    fn categories(&self) -> FintrackResult<Vec<Category>> {
        let conn = self.connect()?;
        Ok(queries::get_categories(&conn)?)
    }

    fn remove_expense(&self, id: ExpenseId) -> FintrackResult<bool> {
        let conn = self.connect()?;
        Ok(queries::delete_expense(&conn, id)? > 0)
    }

    fn category_stats(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> FintrackResult<Vec<CategoryStat>> {
        let conn = self.connect()?;
        let stats = queries::get_category_stats(&conn, period, today)?;
        Ok(finalize_stats(stats))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_created_on_initialize() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(temp_dir.path().join("finance_tracker.db"));

        store.initialize().unwrap();
        assert!(store.location().exists());
        assert_eq!(store.categories().unwrap()[0].name, "Food");
    }

    #[test]
    fn test_unreadable_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("not_a_db.db");
        std::fs::write(&path, "not a sqlite database\n".repeat(200)).unwrap();

        let store = SqliteStore::new(path);
        assert!(store.initialize().is_err());
        assert!(store.categories().is_err());
    }
}
