//! Prompt generation pipeline.

use rand::Rng;

use crate::app::AppContext;
use crate::domain::derived::{DefaultTexts, derive_patient};
use crate::domain::patient::{FieldAliases, normalize_all};
use crate::domain::prompt::{PromptTemplate, RenderedPrompt, TemplateRenderer, render_prompt};
use crate::domain::selection::{Selection, SelectionCriteria, select_patient};
use crate::domain::{AppError, PromptConfig};
use crate::ports::{Clock, RecordSource};

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub criteria: SelectionCriteria,
    pub template: PromptTemplate,
    pub defaults: DefaultTexts,
    pub aliases: FieldAliases,
}

impl GenerateOptions {
    /// Options for `diagnosis` with the built-in template, defaults and aliases.
    pub fn for_diagnosis(diagnosis: impl Into<String>) -> Self {
        Self {
            criteria: SelectionCriteria::new(diagnosis),
            template: PromptTemplate::default(),
            defaults: DefaultTexts::default(),
            aliases: FieldAliases::default(),
        }
    }

    pub fn from_config(config: &PromptConfig) -> Result<Self, AppError> {
        Ok(Self {
            criteria: SelectionCriteria::new(config.diagnosis.clone()),
            template: config.template()?,
            defaults: config.defaults.clone(),
            aliases: config.aliases()?,
        })
    }
}

/// Result of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// A patient matched and the prompt was rendered.
    Rendered(RenderedPrompt),
    /// No record satisfied the diagnosis query.
    NoPatientFound { diagnosis: String },
}

impl GenerateOutcome {
    pub fn prompt(&self) -> Option<&RenderedPrompt> {
        match self {
            GenerateOutcome::Rendered(prompt) => Some(prompt),
            GenerateOutcome::NoPatientFound { .. } => None,
        }
    }
}

/// Run the pipeline: fetch, normalize, select, derive, render.
pub fn execute<S, C, R, T>(
    ctx: &AppContext<S, C>,
    options: &GenerateOptions,
    rng: &mut R,
    renderer: &T,
) -> Result<GenerateOutcome, AppError>
where
    S: RecordSource,
    C: Clock,
    R: Rng + ?Sized,
    T: TemplateRenderer + ?Sized,
{
    let records = ctx.records().fetch_all()?;
    tracing::debug!(
        source = %ctx.records().describe(),
        count = records.len(),
        "fetched patient records"
    );

    let patients = normalize_all(&records, &options.aliases);
    let diagnosis = options.criteria.diagnosis();

    let patient = match select_patient(&patients, &options.criteria, rng) {
        Selection::Found(patient) => patient,
        Selection::NotFound => {
            tracing::info!(diagnosis, "no patient matched the diagnosis query");
            return Ok(GenerateOutcome::NoPatientFound { diagnosis: diagnosis.to_string() });
        }
    };

    let today = ctx.clock().today();
    let selected = derive_patient(&patient, today, &options.defaults)?;
    tracing::debug!(age = selected.age, %today, "derived patient fields");

    let prompt = render_prompt(renderer, &options.template, &selected, diagnosis)?;
    Ok(GenerateOutcome::Rendered(prompt))
}
