//! Report generator
//!
//! Ties the category report to a [`Storage`]: generation never fails, it
//! falls back to an empty report after logging the cause.

use std::cell::Cell;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, error, warn};

use crate::display::report::format_category_report;
use crate::error::{FintrackError, FintrackResult};
use crate::models::Period;
use crate::storage::Storage;

use super::category::{CategoryReport, ReportFormat};

/// Builds, saves and prints category reports
pub struct ReportGenerator<'a> {
    storage: &'a Storage,
    currency_symbol: String,
    last_saved: Cell<bool>,
}

impl<'a> ReportGenerator<'a> {
    /// Create a generator reading from `storage`
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            currency_symbol: String::new(),
            last_saved: Cell::new(false),
        }
    }

    /// Use `symbol` after every printed amount
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Generate the report for `period`, writing it to `output` when given
    ///
    /// Any failure while gathering statistics yields
    /// [`CategoryReport::default`]. A failed or skipped save is logged and
    /// the report is still returned; [`Self::last_saved`] tells whether a
    /// file was written.
    pub fn generate_category_report(&self, period: Period, output: Option<&Path>) -> CategoryReport {
        let report = self.generate(period);
        let saved = match output {
            Some(path) if !report.is_empty() => self.save(&report, path),
            _ => false,
        };
        self.last_saved.set(saved);
        report
    }

    /// Whether the last [`Self::generate_category_report`] call wrote a file
    pub fn last_saved(&self) -> bool {
        self.last_saved.get()
    }

    /// Generate the report for `period` without saving it
    pub fn generate(&self, period: Period) -> CategoryReport {
        match CategoryReport::generate(self.storage.store(), period, self.storage.clock()) {
            Ok(report) => {
                debug!(
                    %period,
                    categories = report.categories.len(),
                    total = report.total_expenses,
                    "report generated"
                );
                report
            }
            Err(e) => {
                error!("Failed to generate report: {}", e);
                CategoryReport::default()
            }
        }
    }

    /// Save the report to `path`, returning whether a file was written
    pub fn save(&self, report: &CategoryReport, path: &Path) -> bool {
        match Self::export(report, path) {
            Ok(Some(format)) => {
                debug!(path = %path.display(), ?format, "report saved");
                true
            }
            Ok(None) => {
                warn!(
                    "Not saving report to {}: use a .json or .csv file",
                    path.display()
                );
                false
            }
            Err(e) => {
                error!("Failed to save report: {}", e);
                false
            }
        }
    }

    /// Write `report` to `path` in the format its extension selects
    ///
    /// Returns `Ok(None)` without touching the file system when the extension
    /// is neither `.json` nor `.csv`.
    pub fn export(report: &CategoryReport, path: &Path) -> FintrackResult<Option<ReportFormat>> {
        let Some(format) = ReportFormat::from_path(path) else {
            return Ok(None);
        };

        let file = File::create(path).map_err(|e| {
            FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        report.export(format, &mut writer)?;
        writer
            .flush()
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        Ok(Some(format))
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &CategoryReport) {
        print!("{}", format_category_report(report, &self.currency_symbol));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use crate::storage::test_support::{create_test_storage, BACKENDS};
    use crate::storage::StorageBackend;

    #[test]
    fn test_generate_category_report_scenario() {
        for backend in BACKENDS {
            let (_temp_dir, storage) = create_test_storage(backend);
            storage.add_expense(CategoryId::new(1), 100.0, "Groceries", None);
            storage.add_expense(CategoryId::new(2), 50.0, "Metro", None);

            let report = ReportGenerator::new(&storage).generate_category_report(Period::All, None);

            assert_eq!(report.total_expenses, 150.0);
            assert_eq!(report.categories[0].category_name, "Food");
            assert_eq!(report.categories[1].category_name, "Transport");
        }
    }

    #[test]
    fn test_writes_csv_file() {
        let (temp_dir, storage) = create_test_storage(StorageBackend::Json);
        storage.add_expense(CategoryId::new(1), 100.0, "Groceries", None);
        let path = temp_dir.path().join("report.csv");

        let report =
            ReportGenerator::new(&storage).generate_category_report(Period::Month, Some(&path));

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Category,Total Amount,Transaction Count"));
        assert!(text.contains("Food,100,1"));
        assert!(text.trim_end().ends_with("Total expenses:,100"));
        assert_eq!(report.total_expenses, 100.0);
    }

    #[test]
    fn test_last_saved_tracks_each_call() {
        let (temp_dir, storage) = create_test_storage(StorageBackend::Json);
        let generator = ReportGenerator::new(&storage);
        assert!(!generator.last_saved());

        generator.generate_category_report(Period::All, Some(&temp_dir.path().join("a.json")));
        assert!(generator.last_saved());

        generator.generate_category_report(Period::All, Some(&temp_dir.path().join("a.txt")));
        assert!(!generator.last_saved());

        generator.generate_category_report(Period::All, Some(&temp_dir.path().join("b.csv")));
        generator.generate_category_report(Period::All, None);
        assert!(!generator.last_saved());
    }

    #[test]
    fn test_csv_total_row_matches_report_total() {
        for backend in BACKENDS {
            let (temp_dir, storage) = create_test_storage(backend);
            storage.add_expense(CategoryId::new(1), 10.125, "Coffee beans", None);
            storage.add_expense(CategoryId::new(2), 0.004, "Rounding fee", None);
            let path = temp_dir.path().join("report.csv");

            let report =
                ReportGenerator::new(&storage).generate_category_report(Period::All, Some(&path));

            let text = std::fs::read_to_string(&path).unwrap();
            let total: f64 = text
                .lines()
                .last()
                .and_then(|line| line.strip_prefix("Total expenses:,"))
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(total, report.total_expenses);
            assert!(text.contains("Food,10.125,1"));
        }
    }

    #[test]
    fn test_writes_json_file() {
        let (temp_dir, storage) = create_test_storage(StorageBackend::Sqlite);
        storage.add_expense(CategoryId::new(5), 80.0, "Jacket", None);
        let path = temp_dir.path().join("report.json");

        let report =
            ReportGenerator::new(&storage).generate_category_report(Period::Year, Some(&path));

        let saved: CategoryReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, report);
    }

    #[test]
    fn test_unknown_extension_is_not_written() {
        let (temp_dir, storage) = create_test_storage(StorageBackend::Json);
        let path = temp_dir.path().join("report.txt");
        let generator = ReportGenerator::new(&storage);

        let report = generator.generate_category_report(Period::All, Some(&path));

        assert!(!report.is_empty());
        assert!(!path.exists());
        assert!(!generator.save(&report, &path));
    }

    #[test]
    fn test_save_failure_keeps_report() {
        let (temp_dir, storage) = create_test_storage(StorageBackend::Json);
        storage.add_expense(CategoryId::new(1), 5.0, "Snack", None);
        let path = temp_dir.path().join("missing_dir").join("report.csv");

        let report =
            ReportGenerator::new(&storage).generate_category_report(Period::All, Some(&path));

        assert_eq!(report.total_expenses, 5.0);
        assert!(!path.exists());
    }

    #[test]
    fn test_storage_failure_gives_default_report() {
        let (temp_dir, storage) = create_test_storage(StorageBackend::Json);
        std::fs::write(temp_dir.path().join("finance_tracker.json"), "{ broken").unwrap();

        let report = ReportGenerator::new(&storage).generate_category_report(Period::All, None);
        assert!(report.is_empty());
        assert_eq!(report, CategoryReport::default());
    }
}
