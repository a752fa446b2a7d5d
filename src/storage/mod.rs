//! Storage layer for fintrack
//!
//! Two interchangeable backends sit behind [`ExpenseStore`]: a single JSON
//! document written atomically, and a single-file SQLite database. The
//! [`Storage`] coordinator owns the selected backend and the clock and
//! exposes the fail-soft operations the command layer uses.

pub mod file_io;
pub mod init;
pub mod json;
pub mod sqlite;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use json::JsonStore;
pub use sqlite::SqliteStore;

use std::path::Path;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::clock::Clock;
use crate::config::paths::TrackerPaths;
use crate::error::FintrackResult;
use crate::models::{Category, CategoryId, CategoryStat, Expense, ExpenseId, Period};

/// Operations every storage backend provides
///
/// Backends open and release their file inside each call. Errors are
/// returned as-is; [`Storage`] decides how to surface them.
pub trait ExpenseStore {
    /// Create the storage location and seed default categories if it is new
    fn initialize(&self) -> FintrackResult<()>;

    /// Append an expense and return its freshly allocated id
    fn insert_expense(
        &self,
        category_id: CategoryId,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> FintrackResult<ExpenseId>;

    /// Expenses in `period`, newest date first, ties by id descending
    fn expenses(&self, period: Period, today: NaiveDate) -> FintrackResult<Vec<Expense>>;

    /// All categories ascending by id
    fn categories(&self) -> FintrackResult<Vec<Category>>;

    /// Remove an expense, returning whether it existed
    fn remove_expense(&self, id: ExpenseId) -> FintrackResult<bool>;

    /// Per-category totals for `period`, largest total first
    fn category_stats(&self, period: Period, today: NaiveDate)
        -> FintrackResult<Vec<CategoryStat>>;

    /// The file backing this store
    fn location(&self) -> &Path;
}

/// Which backend holds the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// A single pretty-printed JSON document
    Json,
    /// A single-file SQLite database
    Sqlite,
}

impl StorageBackend {
    /// Infer the backend from the data file extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("db") | Some("sqlite") | Some("sqlite3") => Self::Sqlite,
            _ => Self::Json,
        }
    }

    /// Pick the backend: explicit choice, then settings, then file extension
    pub fn resolve(
        explicit: Option<StorageBackend>,
        configured: Option<StorageBackend>,
        path: &Path,
    ) -> Self {
        explicit
            .or(configured)
            .unwrap_or_else(|| Self::from_path(path))
    }

    /// Construct an (uninitialized) store of this kind at `path`
    pub fn create_store(&self, path: &Path) -> Box<dyn ExpenseStore> {
        match self {
            Self::Json => Box::new(JsonStore::new(path.to_path_buf())),
            Self::Sqlite => Box::new(SqliteStore::new(path.to_path_buf())),
        }
    }
}

/// Main storage coordinator
///
/// Every operation here swallows backend errors: they are logged and turned
/// into `false` or an empty list. Use [`Storage::store`] when the failure
/// reason matters.
pub struct Storage {
    store: Box<dyn ExpenseStore>,
    clock: Box<dyn Clock>,
}

impl Storage {
    /// Wrap an already initialized store
    pub fn new(store: Box<dyn ExpenseStore>, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Initialize the data file for `backend` and wrap it
    pub fn open(
        paths: &TrackerPaths,
        backend: StorageBackend,
        clock: Box<dyn Clock>,
    ) -> FintrackResult<Self> {
        let store = initialize_storage(paths, backend)?;
        Ok(Self::new(store, clock))
    }

    /// The underlying backend, with errors intact
    pub fn store(&self) -> &dyn ExpenseStore {
        self.store.as_ref()
    }

    /// The clock used for default dates and timestamps
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Today's date according to the clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Add an expense; `date` defaults to today
    ///
    /// Returns `false` if the write failed.
    pub fn add_expense(
        &self,
        category_id: CategoryId,
        amount: f64,
        description: &str,
        date: Option<NaiveDate>,
    ) -> bool {
        let date = date.unwrap_or_else(|| self.today());
        match self
            .store
            .insert_expense(category_id, amount, description, date)
        {
            Ok(id) => {
                debug!(%id, %category_id, amount, %date, "expense added");
                true
            }
            Err(e) => {
                error!("Failed to add expense: {}", e);
                false
            }
        }
    }

    /// Expenses in `period`, newest first; empty on failure
    pub fn list_expenses(&self, period: Period) -> Vec<Expense> {
        self.store
            .expenses(period, self.today())
            .unwrap_or_else(|e| {
                error!("Failed to list expenses: {}", e);
                Vec::new()
            })
    }

    /// All categories ascending by id; empty on failure
    pub fn list_categories(&self) -> Vec<Category> {
        self.store.categories().unwrap_or_else(|e| {
            error!("Failed to list categories: {}", e);
            Vec::new()
        })
    }

    /// Delete an expense; `false` if it was absent or the write failed
    pub fn delete_expense(&self, id: ExpenseId) -> bool {
        match self.store.remove_expense(id) {
            Ok(removed) => {
                debug!(%id, removed, "delete expense");
                removed
            }
            Err(e) => {
                error!("Failed to delete expense {}: {}", id, e);
                false
            }
        }
    }

    /// Per-category totals for `period`; empty on failure
    pub fn category_stats(&self, period: Period) -> Vec<CategoryStat> {
        self.store
            .category_stats(period, self.today())
            .unwrap_or_else(|e| {
                error!("Failed to compute category statistics: {}", e);
                Vec::new()
            })
    }
}
