//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::app::api;
use crate::app::commands::generate::GenerateOutcome;
use crate::app::logging;
use crate::domain::AppError;

pub const NO_PATIENT_MESSAGE: &str = "No patient data found for the given diagnosis.";

#[derive(Parser)]
#[command(name = "clinprompt")]
#[command(version)]
#[command(
    about = "Synthesize a clinical-report prompt from a randomly selected patient record",
    long_about = None
)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long = "config_path", default_value = "config.yaml")]
    config_path: PathBuf,
}

pub fn run() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run_generate(&cli.config_path) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(config_path: &Path) -> Result<(), AppError> {
    match api::generate_prompt_at(config_path)? {
        GenerateOutcome::Rendered(prompt) => println!("{}", prompt),
        GenerateOutcome::NoPatientFound { .. } => println!("{}", NO_PATIENT_MESSAGE),
    }
    Ok(())
}
