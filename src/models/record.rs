//! Key-value record helpers
//!
//! Models convert to and from a `serde_json::Map` so storage backends can move
//! them around without caring about field layout. Missing or mistyped fields
//! surface as [`ModelError`] rather than a panic.

use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

/// A generic key-value record as stored on disk
pub type Record = Map<String, Value>;

/// Date format used for every persisted expense date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised when converting a record into a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ModelError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

fn field<'a>(record: &'a Record, name: &'static str) -> Result<&'a Value, ModelError> {
    record.get(name).ok_or(ModelError::MissingField(name))
}

pub(crate) fn get_i64(record: &Record, name: &'static str) -> Result<i64, ModelError> {
    field(record, name)?
        .as_i64()
        .ok_or_else(|| ModelError::invalid(name, "expected an integer"))
}

/// Integers are accepted and widened, matching how JSON numbers round-trip.
pub(crate) fn get_f64(record: &Record, name: &'static str) -> Result<f64, ModelError> {
    field(record, name)?
        .as_f64()
        .ok_or_else(|| ModelError::invalid(name, "expected a number"))
}

pub(crate) fn get_str<'a>(record: &'a Record, name: &'static str) -> Result<&'a str, ModelError> {
    field(record, name)?
        .as_str()
        .ok_or_else(|| ModelError::invalid(name, "expected a string"))
}

pub(crate) fn get_date(record: &Record, name: &'static str) -> Result<NaiveDate, ModelError> {
    let raw = get_str(record, name)?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|e| ModelError::invalid(name, format!("'{}' is not a YYYY-MM-DD date: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_missing_field() {
        let r = record(json!({}));
        assert_eq!(get_i64(&r, "id"), Err(ModelError::MissingField("id")));
    }

    #[test]
    fn test_integer_widens_to_float() {
        let r = record(json!({"amount": 100}));
        assert_eq!(get_f64(&r, "amount").unwrap(), 100.0);
    }

    #[test]
    fn test_wrong_type() {
        let r = record(json!({"id": "one"}));
        assert!(matches!(
            get_i64(&r, "id"),
            Err(ModelError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn test_bad_date() {
        let r = record(json!({"date": "15/01/2024"}));
        let err = get_date(&r, "date").unwrap_err();
        assert!(err.to_string().contains("15/01/2024"));
    }
}
