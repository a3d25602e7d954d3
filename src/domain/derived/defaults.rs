use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NIL_PAST_HISTORY: &str = "Nil significant past medical history";
pub const NO_OBSERVATIONS: &str = "No observations recorded";
pub const NO_CARE_PLANS: &str = "No care plans recorded";

/// Fallback texts substituted for blank patient fields.
///
/// Deserializable so configuration can override any subset of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultTexts {
    #[serde(default = "not_specified")]
    pub gender: String,
    #[serde(default = "nil_past_history")]
    pub conditions: String,
    #[serde(default = "no_observations")]
    pub observations: String,
    #[serde(default = "no_care_plans")]
    pub care_plans: String,
    #[serde(default = "not_specified")]
    pub modality: String,
    #[serde(default = "not_specified")]
    pub body_area: String,
}

impl Default for DefaultTexts {
    fn default() -> Self {
        Self {
            gender: not_specified(),
            conditions: nil_past_history(),
            observations: no_observations(),
            care_plans: no_care_plans(),
            modality: not_specified(),
            body_area: not_specified(),
        }
    }
}

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

fn nil_past_history() -> String {
    NIL_PAST_HISTORY.to_string()
}

fn no_observations() -> String {
    NO_OBSERVATIONS.to_string()
}

fn no_care_plans() -> String {
    NO_CARE_PLANS.to_string()
}
