//! Category model
//!
//! Categories are a fixed starter set seeded when the store is created.
//! They are never created, renamed or removed by the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::ids::CategoryId;
use super::record::{get_i64, get_str, ModelError, Record};

/// Categories seeded into a fresh store, with their fixed ids
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Food"),
    (2, "Transport"),
    (3, "Entertainment"),
    (4, "Utilities"),
    (5, "Clothing"),
    (6, "Health"),
];

/// An expense category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (unique)
    pub name: String,
}

impl Category {
    /// Create a category
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The seeded starter categories, ascending by id
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES
            .iter()
            .map(|(id, name)| Self::new(CategoryId::new(*id), *name))
            .collect()
    }

    /// Case-insensitive name comparison used for lookups by name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Convert to a key-value record
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::from(self.id.value()));
        record.insert("name".into(), Value::from(self.name.clone()));
        record
    }

    /// Build a category from a key-value record
    pub fn from_record(record: &Record) -> Result<Self, ModelError> {
        Ok(Self {
            id: CategoryId::new(get_i64(record, "id")?),
            name: get_str(record, "name")?.to_string(),
        })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
