//! Expense model
//!
//! An expense is a single dated, categorized amount. Expenses are created and
//! deleted but never edited in place.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::{CategoryId, ExpenseId};
use super::record::{get_date, get_f64, get_i64, get_str, ModelError, Record, DATE_FORMAT};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier
    pub id: ExpenseId,

    /// Category this expense belongs to
    pub category_id: CategoryId,

    /// Amount spent (not validated for sign or range)
    pub amount: f64,

    /// Free-text description
    pub description: String,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Create an expense
    pub fn new(
        id: ExpenseId,
        category_id: CategoryId,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            category_id,
            amount,
            description: description.into(),
            date,
        }
    }

    /// The date as stored on disk (YYYY-MM-DD)
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Convert to a key-value record
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::from(self.id.value()));
        record.insert("category_id".into(), Value::from(self.category_id.value()));
        record.insert("amount".into(), Value::from(self.amount));
        record.insert("description".into(), Value::from(self.description.clone()));
        record.insert("date".into(), Value::from(self.date_string()));
        record
    }

    /// Build an expense from a key-value record
    pub fn from_record(record: &Record) -> Result<Self, ModelError> {
        Ok(Self {
            id: ExpenseId::new(get_i64(record, "id")?),
            category_id: CategoryId::new(get_i64(record, "category_id")?),
            amount: get_f64(record, "amount")?,
            description: get_str(record, "description")?.to_string(),
            date: get_date(record, "date")?,
        })
    }
}
