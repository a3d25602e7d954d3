//! Prompt generation configuration domain model.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::AppError;
use crate::domain::derived::DefaultTexts;
use crate::domain::patient::{CanonicalField, FieldAliases};
use crate::domain::prompt::PromptTemplate;

pub const CSV_PATH_KEY: &str = "cleaned_data_csv_path";
pub const RECORDS_PATH_KEY: &str = "records_path";

/// Where patient records are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSourceKind {
    /// Cleaned CSV export, one record per row.
    Csv,
    /// YAML or JSON sequence of records.
    Document,
    /// Built-in demonstration dataset.
    Sample,
}

/// Configuration loaded from the `--config_path` YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptConfig {
    /// Template overriding the built-in prompt.
    #[serde(default)]
    pub prompt_template: Option<String>,
    /// Diagnosis query; blank selects patients without a diagnosis.
    #[serde(default = "default_diagnosis", deserialize_with = "null_as_blank")]
    pub diagnosis: String,
    /// Explicit record source; inferred from the path keys when absent.
    #[serde(default)]
    pub record_source: Option<RecordSourceKind>,
    #[serde(default)]
    pub cleaned_data_csv_path: Option<PathBuf>,
    #[serde(default)]
    pub records_path: Option<PathBuf>,
    /// Seed for reproducible patient selection.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Date ages are computed on; today when absent.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
    #[serde(default)]
    pub defaults: DefaultTexts,
    /// Alias list overrides keyed by canonical field name.
    #[serde(default)]
    pub field_aliases: BTreeMap<String, Vec<String>>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            prompt_template: None,
            diagnosis: default_diagnosis(),
            record_source: None,
            cleaned_data_csv_path: None,
            records_path: None,
            seed: None,
            reference_date: None,
            defaults: DefaultTexts::default(),
            field_aliases: BTreeMap::new(),
        }
    }
}

fn default_diagnosis() -> String {
    "lung cancer".to_string()
}

// `diagnosis:` with no value is the blank query, not a type error.
fn null_as_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PromptConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.template()?;
        self.aliases()?;

        match self.record_source() {
            RecordSourceKind::Csv if self.cleaned_data_csv_path.is_none() => {
                Err(AppError::MissingConfigKey { key: CSV_PATH_KEY.to_string() })
            }
            RecordSourceKind::Document if self.records_path.is_none() => {
                Err(AppError::MissingConfigKey { key: RECORDS_PATH_KEY.to_string() })
            }
            _ => Ok(()),
        }
    }

    /// Explicit source, else csv, document, sample in that order of presence.
    pub fn record_source(&self) -> RecordSourceKind {
        if let Some(kind) = self.record_source {
            return kind;
        }
        if self.cleaned_data_csv_path.is_some() {
            RecordSourceKind::Csv
        } else if self.records_path.is_some() {
            RecordSourceKind::Document
        } else {
            RecordSourceKind::Sample
        }
    }

    /// Configured template, or the built-in one.
    pub fn template(&self) -> Result<PromptTemplate, AppError> {
        match &self.prompt_template {
            Some(source) => Ok(PromptTemplate::parse(source)?),
            None => Ok(PromptTemplate::default()),
        }
    }

    /// Built-in alias table with configured overrides applied.
    pub fn aliases(&self) -> Result<FieldAliases, AppError> {
        let mut aliases = FieldAliases::default();
        for (name, list) in &self.field_aliases {
            let key = format!("field_aliases.{}", name);
            let field = CanonicalField::from_name(name).ok_or_else(|| {
                let known: Vec<_> = CanonicalField::ALL.iter().map(|f| f.name()).collect();
                AppError::invalid_config(&key, format!("expected one of {}", known.join(", ")))
            })?;
            if list.iter().all(|alias| alias.trim().is_empty()) {
                return Err(AppError::invalid_config(key, "alias list must not be empty"));
            }
            aliases = aliases.with_aliases(field, list.clone());
        }
        Ok(aliases)
    }

    /// Resolve relative record paths against `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |path: PathBuf| if path.is_absolute() { path } else { base.join(path) };
        self.cleaned_data_csv_path = self.cleaned_data_csv_path.map(resolve);
        self.records_path = self.records_path.map(resolve);
        self
    }
}
