use chrono::NaiveDate;

use crate::domain::AppError;
use crate::domain::patient::NormalizedPatient;

use super::age::age_from_birth_date;
use super::defaults::DefaultTexts;

/// Selected patient with derived age and every blank field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedPatient {
    pub age: u32,
    pub gender: String,
    pub conditions: Vec<String>,
    pub observations: Vec<String>,
    pub care_plans: Vec<String>,
    pub modality: String,
    pub body_area: String,
}

/// Compute derived fields and apply `defaults` to blank ones.
///
/// A malformed birth date fails the whole derivation; it is never replaced
/// by a default.
pub fn derive_patient(
    patient: &NormalizedPatient,
    today: NaiveDate,
    defaults: &DefaultTexts,
) -> Result<SelectedPatient, AppError> {
    let age = age_from_birth_date(patient.birth_date(), today)?;

    Ok(SelectedPatient {
        age,
        gender: text_or(patient.gender(), &defaults.gender),
        conditions: entries_or(patient.conditions(), &defaults.conditions),
        observations: entries_or(patient.observations(), &defaults.observations),
        care_plans: entries_or(patient.care_plans(), &defaults.care_plans),
        modality: text_or(patient.modality(), &defaults.modality),
        body_area: text_or(patient.body_area(), &defaults.body_area),
    })
}

fn text_or(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() { default.to_string() } else { trimmed.to_string() }
}

fn entries_or(entries: &[String], default: &str) -> Vec<String> {
    if entries.is_empty() { vec![default.to_string()] } else { entries.to_vec() }
}
