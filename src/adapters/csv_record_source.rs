use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::domain::{AppError, PatientRecord};
use crate::ports::RecordSource;

/// Record source backed by a cleaned CSV export.
///
/// The header row supplies the keys; every following row is one record.
#[derive(Debug, Clone)]
pub struct CsvRecordSource {
    path: PathBuf,
}

impl CsvRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, err: impl std::fmt::Display) -> AppError {
        AppError::RecordSource { path: self.path.display().to_string(), details: err.to_string() }
    }
}

impl RecordSource for CsvRecordSource {
    fn fetch_all(&self) -> Result<Vec<PatientRecord>, AppError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .from_path(&self.path)
            .map_err(|err| self.error(err))?;
        let headers = reader.headers().map_err(|err| self.error(err))?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|err| self.error(err))?;
            let record: PatientRecord =
                headers.iter().zip(row.iter()).filter(|(key, _)| !key.is_empty()).collect();
            records.push(record);
        }
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("csv file {}", self.path.display())
    }
}
