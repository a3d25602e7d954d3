use super::aliases::{CanonicalField, FieldAliases};
use super::record::PatientRecord;

/// Canonical, read-only view of a patient record.
///
/// Absent fields are empty rather than missing; defaulting happens later,
/// after selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedPatient {
    birth_date: String,
    gender: String,
    conditions: Vec<String>,
    observations: Vec<String>,
    care_plans: Vec<String>,
    modality: String,
    body_area: String,
}

impl NormalizedPatient {
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    /// Recorded diagnosis text; entries are joined with ", ".
    pub fn diagnosis(&self) -> String {
        self.conditions.join(", ")
    }

    /// Whether no diagnosis is recorded.
    pub fn has_blank_diagnosis(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn observations(&self) -> &[String] {
        &self.observations
    }

    pub fn care_plans(&self) -> &[String] {
        &self.care_plans
    }

    pub fn modality(&self) -> &str {
        &self.modality
    }

    pub fn body_area(&self) -> &str {
        &self.body_area
    }
}

/// Map a raw record onto the canonical schema.
pub fn normalize(record: &PatientRecord, aliases: &FieldAliases) -> NormalizedPatient {
    let text = |field: CanonicalField| {
        aliases.resolve(field, record).map(|value| value.text()).unwrap_or_default()
    };
    let entries = |field: CanonicalField| {
        aliases.resolve(field, record).map(|value| value.entries()).unwrap_or_default()
    };

    NormalizedPatient {
        birth_date: text(CanonicalField::BirthDate),
        gender: text(CanonicalField::Gender),
        conditions: entries(CanonicalField::Diagnosis),
        observations: entries(CanonicalField::Observations),
        care_plans: entries(CanonicalField::CarePlans),
        modality: text(CanonicalField::Modality),
        body_area: text(CanonicalField::BodyArea),
    }
}

/// Normalize every record of a source snapshot.
pub fn normalize_all(records: &[PatientRecord], aliases: &FieldAliases) -> Vec<NormalizedPatient> {
    records.iter().map(|record| normalize(record, aliases)).collect()
}
