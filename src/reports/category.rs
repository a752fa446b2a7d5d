//! Category Report
//!
//! Aggregates spending per category for a period and serializes the result
//! to JSON or CSV.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

use crate::clock::Clock;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{CategoryStat, Period};
use crate::storage::ExpenseStore;

/// Header row of the CSV export
pub const CSV_HEADER: [&str; 3] = ["Category", "Total Amount", "Transaction Count"];

/// Label of the CSV summary row
pub const CSV_TOTAL_LABEL: &str = "Total expenses:";

/// File formats a report can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// The whole report object, pretty-printed
    Json,
    /// A per-category table followed by a total row
    Csv,
}

impl ReportFormat {
    /// Pick the format from a destination's extension
    ///
    /// Returns `None` for any other or missing extension, meaning the report
    /// is not persisted.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

/// Spending per category for one period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    /// Period keyword the report covers; empty for a report that failed
    pub period: String,
    /// When the report was generated
    pub generated_at: DateTime<Local>,
    /// Sum of every category total
    pub total_expenses: f64,
    /// Categories with spending, largest total first
    pub categories: Vec<CategoryStat>,
}

impl CategoryReport {
    /// Generate a report from the store's category statistics
    pub fn generate(
        store: &dyn ExpenseStore,
        period: Period,
        clock: &dyn Clock,
    ) -> FintrackResult<Self> {
        let categories = store.category_stats(period, clock.today())?;
        Ok(Self::from_stats(period, clock.now(), categories))
    }

    /// Build a report from already aggregated statistics
    pub fn from_stats(
        period: Period,
        generated_at: DateTime<Local>,
        categories: Vec<CategoryStat>,
    ) -> Self {
        let total_expenses = categories.iter().map(|c| c.total_amount).sum();
        Self {
            period: period.to_string(),
            generated_at,
            total_expenses,
            categories,
        }
    }

    /// True for the default report returned when generation failed
    pub fn is_empty(&self) -> bool {
        self.period.is_empty()
    }

    /// Export the report as pretty-printed JSON
    pub fn export_json<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        serde_json::to_writer_pretty(&mut *writer, self)
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
        Ok(())
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FintrackResult<()> {
        let mut csv = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(writer);

        csv.write_record(CSV_HEADER)?;

        for category in &self.categories {
            csv.write_record([
                category.category_name.clone(),
                category.total_amount.to_string(),
                category.transaction_count.to_string(),
            ])?;
        }

        // The csv writer renders an empty record as `""`, so the blank
        // separator and the fixed summary row are written directly.
        // Amounts are written unrounded so the total row parses back to
        // `total_expenses` exactly.
        let writer = csv
            .into_inner()
            .map_err(|e| FintrackError::Export(e.to_string()))?;
        writeln!(writer).map_err(|e| FintrackError::Export(e.to_string()))?;
        writeln!(writer, "{},{}", CSV_TOTAL_LABEL, self.total_expenses)
            .map_err(|e| FintrackError::Export(e.to_string()))?;

        Ok(())
    }

    /// Export in the given format
    pub fn export<W: Write>(&self, format: ReportFormat, writer: &mut W) -> FintrackResult<()> {
        match format {
            ReportFormat::Json => self.export_json(writer),
            ReportFormat::Csv => self.export_csv(writer),
        }
    }
}
