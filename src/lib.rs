//! clinprompt: synthesize clinical-report prompts from patient records selected by diagnosis.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{generate_prompt, generate_prompt_at};
pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use domain::AppError;
