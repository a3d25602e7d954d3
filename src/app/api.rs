//! Configuration-driven entry points.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::adapters::{
    CsvRecordSource, DocumentRecordSource, FixedClock, MemoryRecordSource,
    MinijinjaTemplateRenderer, SystemClock,
};
use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerateOptions, GenerateOutcome};
use crate::app::config::load_config;
use crate::domain::config::{CSV_PATH_KEY, RECORDS_PATH_KEY};
use crate::domain::{AppError, PromptConfig, RecordSourceKind};
use crate::ports::{Clock, RecordSource};

/// Load the configuration at `config_path` and generate one prompt.
pub fn generate_prompt_at(config_path: &Path) -> Result<GenerateOutcome, AppError> {
    let config = load_config(config_path)?;
    tracing::debug!(config = %config_path.display(), "loaded configuration");
    generate_prompt(&config)
}

/// Generate one prompt from an already loaded configuration.
pub fn generate_prompt(config: &PromptConfig) -> Result<GenerateOutcome, AppError> {
    let options = GenerateOptions::from_config(config)?;
    let ctx = AppContext::new(record_source(config)?, clock(config));
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    generate::execute(&ctx, &options, &mut rng, &MinijinjaTemplateRenderer::new())
}

fn record_source(config: &PromptConfig) -> Result<Box<dyn RecordSource>, AppError> {
    let source: Box<dyn RecordSource> = match config.record_source() {
        RecordSourceKind::Csv => {
            let path = config
                .cleaned_data_csv_path
                .as_ref()
                .ok_or_else(|| AppError::MissingConfigKey { key: CSV_PATH_KEY.to_string() })?;
            Box::new(CsvRecordSource::new(path))
        }
        RecordSourceKind::Document => {
            let path = config
                .records_path
                .as_ref()
                .ok_or_else(|| AppError::MissingConfigKey { key: RECORDS_PATH_KEY.to_string() })?;
            Box::new(DocumentRecordSource::new(path))
        }
        RecordSourceKind::Sample => Box::new(MemoryRecordSource::sample()),
    };
    Ok(source)
}

fn clock(config: &PromptConfig) -> Box<dyn Clock> {
    match config.reference_date {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}
