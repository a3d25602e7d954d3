//! In-crate fixtures for unit tests.

use crate::domain::{AppError, PatientRecord};
use crate::ports::RecordSource;

/// Record shaped like a row of the joined Synthea export.
pub fn synthea_record(birth_date: &str, gender: &str, diagnosis: &str) -> PatientRecord {
    PatientRecord::new()
        .with_field("BIRTHDATE", birth_date)
        .with_field("GENDER", gender)
        .with_field("REASONDESCRIPTION", diagnosis)
        .with_field("observation", "increased cough")
        .with_field("DESCRIPTION_careplan", "regular monitoring")
        .with_field("modality", "X-Ray")
        .with_field("body_area", "Chest")
}

/// Record source whose reads always fail.
#[derive(Debug, Default)]
pub struct FailingRecordSource;

impl RecordSource for FailingRecordSource {
    fn fetch_all(&self) -> Result<Vec<PatientRecord>, AppError> {
        Err(AppError::RecordSource {
            path: "failing-source".to_string(),
            details: "simulated read failure".to_string(),
        })
    }

    fn describe(&self) -> String {
        "failing test source".to_string()
    }
}
