use crate::domain::{AppError, PatientRecord};
use crate::ports::RecordSource;

/// Record source holding an in-memory snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordSource {
    records: Vec<PatientRecord>,
    label: String,
}

impl MemoryRecordSource {
    pub fn new(records: Vec<PatientRecord>) -> Self {
        Self { records, label: "in-memory records".to_string() }
    }

    /// Built-in demonstration dataset: one lung-cancer patient and one
    /// patient without a recorded diagnosis.
    pub fn sample() -> Self {
        let records = vec![
            PatientRecord::new()
                .with_field("BIRTHDATE", "1990-01-01")
                .with_field("GENDER", "Male")
                .with_field("REASONDESCRIPTION", "lung cancer")
                .with_field("observation", "increased cough")
                .with_field("DESCRIPTION_careplan", "regular monitoring")
                .with_field("modality", "X-Ray")
                .with_field("body_area", "Chest"),
            PatientRecord::new()
                .with_field("BIRTHDATE", "1985-05-15")
                .with_field("GENDER", "Female")
                .with_field("REASONDESCRIPTION", "")
                .with_field("observation", "shortness of breath")
                .with_field("DESCRIPTION_careplan", "oxygen therapy")
                .with_field("modality", "CT Scan")
                .with_field("body_area", "Chest"),
        ];
        Self { records, label: "built-in sample records".to_string() }
    }
}

impl RecordSource for MemoryRecordSource {
    fn fetch_all(&self) -> Result<Vec<PatientRecord>, AppError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("{} ({} records)", self.label, self.records.len())
    }
}
