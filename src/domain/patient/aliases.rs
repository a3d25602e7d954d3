use std::collections::BTreeMap;
use std::fmt;

use super::record::{FieldValue, PatientRecord};

/// Logical fields of the canonical patient schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    BirthDate,
    Gender,
    Diagnosis,
    Observations,
    CarePlans,
    Modality,
    BodyArea,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::BirthDate,
        CanonicalField::Gender,
        CanonicalField::Diagnosis,
        CanonicalField::Observations,
        CanonicalField::CarePlans,
        CanonicalField::Modality,
        CanonicalField::BodyArea,
    ];

    /// Canonical (configuration-facing) name.
    pub fn name(self) -> &'static str {
        match self {
            CanonicalField::BirthDate => "birth_date",
            CanonicalField::Gender => "gender",
            CanonicalField::Diagnosis => "diagnosis",
            CanonicalField::Observations => "observations",
            CanonicalField::CarePlans => "care_plans",
            CanonicalField::Modality => "modality",
            CanonicalField::BodyArea => "body_area",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Historical key spellings seen across record exports, highest priority first.
    fn builtin_aliases(self) -> &'static [&'static str] {
        match self {
            CanonicalField::BirthDate => &["BIRTHDATE", "birthdate", "birth_date", "BirthDate"],
            CanonicalField::Gender => &["GENDER", "gender", "Gender", "sex"],
            CanonicalField::Diagnosis => &[
                "REASONDESCRIPTION",
                "description_cond",
                "reasondescription",
                "DESCRIPTION_cond",
                "diagnosis",
            ],
            CanonicalField::Observations => &[
                "observation",
                "observations",
                "DESCRIPTION_obs",
                "description_obs",
                "OBSERVATION",
            ],
            CanonicalField::CarePlans => {
                &["DESCRIPTION_careplan", "description_careplan", "care_plan", "care_plans"]
            }
            CanonicalField::Modality => {
                &["modality", "MODALITY", "MODALITY_DESCRIPTION", "modality_description"]
            }
            CanonicalField::BodyArea => {
                &["body_area", "BODY_AREA", "BODYSITE_DESCRIPTION", "bodysite_description"]
            }
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alias table mapping each canonical field to its ordered source-key spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    table: BTreeMap<CanonicalField, Vec<String>>,
}

impl Default for FieldAliases {
    fn default() -> Self {
        let table = CanonicalField::ALL
            .into_iter()
            .map(|field| {
                let aliases = field.builtin_aliases().iter().map(|alias| alias.to_string());
                (field, aliases.collect())
            })
            .collect();
        Self { table }
    }
}

impl FieldAliases {
    /// Replace the alias list for one field.
    pub fn with_aliases(mut self, field: CanonicalField, aliases: Vec<String>) -> Self {
        self.table.insert(field, aliases);
        self
    }

    pub fn aliases(&self, field: CanonicalField) -> &[String] {
        self.table.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Value under the first alias present in `record`, matching keys without
    /// regard to ASCII case.
    ///
    /// Presence is decided by the key alone: a present-but-blank value still
    /// wins over later aliases.
    pub fn resolve<'a>(
        &self,
        field: CanonicalField,
        record: &'a PatientRecord,
    ) -> Option<&'a FieldValue> {
        self.aliases(field).iter().find_map(|alias| record.get_ignore_case(alias))
    }
}
