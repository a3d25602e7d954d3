pub mod config;
pub mod derived;
pub mod error;
pub mod patient;
pub mod prompt;
pub mod selection;

pub use config::{PromptConfig, RecordSourceKind};
pub use derived::{DefaultTexts, SelectedPatient, derive_patient};
pub use error::AppError;
pub use patient::{CanonicalField, FieldAliases, FieldValue, NormalizedPatient, PatientRecord};
pub use prompt::{
    DEFAULT_PROMPT_TEMPLATE, Placeholder, PromptContext, PromptTemplate, RenderedPrompt,
    TemplateError, TemplateRenderer, render_prompt,
};
pub use selection::{Selection, SelectionCriteria, select_patient};
