use std::collections::HashMap;

use crate::domain::derived::SelectedPatient;

use super::template::Placeholder;

/// Separator for multi-value fields.
pub const LIST_SEPARATOR: &str = ", ";

/// Resolved placeholder values for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptContext {
    /// Placeholder name to value mapping.
    pub variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with every placeholder of the vocabulary resolved for `patient`.
    pub fn for_patient(patient: &SelectedPatient, diagnosis: &str) -> Self {
        Self::new()
            .with_value(Placeholder::Diagnosis, diagnosis)
            .with_value(Placeholder::Age, patient.age.to_string())
            .with_value(Placeholder::Gender, patient.gender.as_str())
            .with_value(Placeholder::Conditions, patient.conditions.join(LIST_SEPARATOR))
            .with_value(Placeholder::Observations, patient.observations.join(LIST_SEPARATOR))
            .with_value(Placeholder::CarePlans, patient.care_plans.join(LIST_SEPARATOR))
            .with_value(Placeholder::Modality, patient.modality.as_str())
            .with_value(Placeholder::BodyArea, patient.body_area.as_str())
    }

    pub fn with_value(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.variables.insert(placeholder.name().to_string(), value.into());
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.variables.get(placeholder.name()).map(|s| s.as_str())
    }
}
