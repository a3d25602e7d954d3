use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::patient::NormalizedPatient;

/// Diagnosis query used to pick candidate patients.
///
/// A blank query is meaningful: it asks for patients with no recorded diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionCriteria {
    diagnosis: String,
}

impl SelectionCriteria {
    pub fn new(diagnosis: impl Into<String>) -> Self {
        Self { diagnosis: diagnosis.into() }
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn is_blank(&self) -> bool {
        self.diagnosis.trim().is_empty()
    }

    /// Case-insensitive containment of the query in one of the patient's
    /// recorded diagnoses.
    pub fn matches(&self, patient: &NormalizedPatient) -> bool {
        if self.is_blank() {
            return patient.has_blank_diagnosis();
        }
        let query = self.diagnosis.to_lowercase();
        patient.conditions().iter().any(|condition| condition.to_lowercase().contains(&query))
    }
}

/// Outcome of selecting one patient for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Found(NormalizedPatient),
    NotFound,
}

impl Selection {
    pub fn patient(&self) -> Option<&NormalizedPatient> {
        match self {
            Selection::Found(patient) => Some(patient),
            Selection::NotFound => None,
        }
    }
}

/// All patients satisfying `criteria`, in source order.
pub fn match_patients<'a>(
    patients: &'a [NormalizedPatient],
    criteria: &SelectionCriteria,
) -> Vec<&'a NormalizedPatient> {
    patients.iter().filter(|patient| criteria.matches(patient)).collect()
}

/// Pick one matching patient uniformly at random.
pub fn select_patient<R: Rng + ?Sized>(
    patients: &[NormalizedPatient],
    criteria: &SelectionCriteria,
    rng: &mut R,
) -> Selection {
    let candidates = match_patients(patients, criteria);
    match candidates.choose(rng) {
        Some(patient) => Selection::Found((*patient).clone()),
        None => Selection::NotFound,
    }
}
