use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::domain::{AppError, FieldValue, PatientRecord};
use crate::ports::RecordSource;

/// Record source backed by a YAML or JSON document.
///
/// The document is a sequence of maps. `.json` files are read as JSON,
/// anything else as YAML.
#[derive(Debug, Clone)]
pub struct DocumentRecordSource {
    path: PathBuf,
}

impl DocumentRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, details: impl std::fmt::Display) -> AppError {
        AppError::RecordSource {
            path: self.path.display().to_string(),
            details: details.to_string(),
        }
    }

    fn is_json(&self) -> bool {
        self.path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl RecordSource for DocumentRecordSource {
    fn fetch_all(&self) -> Result<Vec<PatientRecord>, AppError> {
        let content = fs::read_to_string(&self.path).map_err(|err| self.error(err))?;
        let document: Value = if self.is_json() {
            serde_json::from_str(&content).map_err(|err| self.error(err))?
        } else {
            serde_yaml::from_str(&content).map_err(|err| self.error(err))?
        };

        let entries = match document {
            Value::Null => return Ok(Vec::new()),
            Value::Array(entries) => entries,
            _ => return Err(self.error("expected a sequence of patient records")),
        };

        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                to_record(entry)
                    .map_err(|reason| self.error(format!("record {}: {}", index, reason)))
            })
            .collect()
    }

    fn describe(&self) -> String {
        format!("document {}", self.path.display())
    }
}

fn to_record(entry: Value) -> Result<PatientRecord, String> {
    let Value::Object(map) = entry else {
        return Err("expected a map of fields".to_string());
    };

    let mut record = PatientRecord::new();
    for (key, value) in map {
        let field = match value {
            Value::Array(items) => {
                let items = items
                    .into_iter()
                    .map(|item| scalar_text(item).ok_or_else(|| nested_error(&key)))
                    .collect::<Result<Vec<_>, _>>()?;
                FieldValue::List(items)
            }
            other => FieldValue::Text(scalar_text(other).ok_or_else(|| nested_error(&key))?),
        };
        record.insert(key, field);
    }
    Ok(record)
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn nested_error(key: &str) -> String {
    format!("field '{}' must be a scalar or a list of scalars", key)
}
