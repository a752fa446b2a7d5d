//! JSON document backend
//!
//! The whole data set lives in one document:
//!
//! ```json
//! { "expenses": [...], "categories": [...], "next_id": 1 }
//! ```
//!
//! Each operation re-reads the document, and writes go through
//! [`write_json_atomic`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::FintrackResult;
use crate::models::{
    finalize_stats, Category, CategoryId, CategoryStat, Expense, ExpenseId, Period, Record,
};

use super::file_io::{read_json, write_json_atomic};
use super::ExpenseStore;

/// On-disk layout of the JSON document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseDocument {
    #[serde(default)]
    expenses: Vec<Record>,
    #[serde(default)]
    categories: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_id: Option<i64>,
}

/// Typed view of the document after record conversion
#[derive(Debug, Clone)]
struct ExpenseData {
    expenses: Vec<Expense>,
    categories: Vec<Category>,
    next_id: i64,
}

impl ExpenseData {
    fn seeded() -> Self {
        Self {
            expenses: Vec::new(),
            categories: Category::defaults(),
            next_id: 1,
        }
    }

    fn from_document(doc: ExpenseDocument) -> FintrackResult<Self> {
        let expenses = doc
            .expenses
            .iter()
            .map(Expense::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        let categories = doc
            .categories
            .iter()
            .map(Category::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        // A missing or stale counter must never hand out an id already in use
        let max_id = expenses.iter().map(|e| e.id.value()).max().unwrap_or(0);
        let next_id = doc.next_id.unwrap_or(1).max(max_id + 1);

        Ok(Self {
            expenses,
            categories,
            next_id,
        })
    }

    fn to_document(&self) -> ExpenseDocument {
        ExpenseDocument {
            expenses: self.expenses.iter().map(Expense::to_record).collect(),
            categories: self.categories.iter().map(Category::to_record).collect(),
            next_id: Some(self.next_id),
        }
    }
}

/// Store backed by a single JSON file
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store for the document at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> FintrackResult<ExpenseData> {
        let doc: ExpenseDocument = read_json(&self.path)?;
        ExpenseData::from_document(doc)
    }

    fn save(&self, data: &ExpenseData) -> FintrackResult<()> {
        write_json_atomic(&self.path, &data.to_document())
    }
}

impl ExpenseStore for JsonStore {
    fn initialize(&self) -> FintrackResult<()> {
        if !self.path.exists() {
            self.save(&ExpenseData::seeded())?;
        }
        Ok(())
    }

    fn insert_expense(
        &self,
        category_id: CategoryId,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> FintrackResult<ExpenseId> {
        let mut data = self.load()?;

        let id = ExpenseId::new(data.next_id);
        data.next_id += 1;
        data.expenses
            .push(Expense::new(id, category_id, amount, description, date));

        self.save(&data)?;
        Ok(id)
    }

    fn expenses(&self, period: Period, today: NaiveDate) -> FintrackResult<Vec<Expense>> {
        let data = self.load()?;

        let mut expenses: Vec<_> = data
            .expenses
            .into_iter()
            .filter(|e| period.contains(e.date, today))
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(expenses)
    }

    fn categories(&self) -> FintrackResult<Vec<Category>> {
        let mut categories = self.load()?.categories;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    fn remove_expense(&self, id: ExpenseId) -> FintrackResult<bool> {
        let mut data = self.load()?;

        let before = data.expenses.len();
        data.expenses.retain(|e| e.id != id);
        if data.expenses.len() == before {
            return Ok(false);
        }

        self.save(&data)?;
        Ok(true)
    }

    fn category_stats(
        &self,
        period: Period,
        today: NaiveDate,
    ) -> FintrackResult<Vec<CategoryStat>> {
        let data = self.load()?;

        let mut totals: HashMap<CategoryId, (u64, f64)> = HashMap::new();
        for expense in data
            .expenses
            .iter()
            .filter(|e| period.contains(e.date, today))
        {
            let entry = totals.entry(expense.category_id).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += expense.amount;
        }

        // Expenses pointing at unknown categories are left out, like an inner join
        let stats = data
            .categories
            .into_iter()
            .filter_map(|category| {
                let (count, total) = totals.get(&category.id).copied()?;
                Some(CategoryStat {
                    category_id: category.id,
                    category_name: category.name,
                    transaction_count: count,
                    total_amount: total,
                })
            })
            .collect();

        Ok(finalize_stats(stats))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
