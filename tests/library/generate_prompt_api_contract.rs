use crate::harness::{SAMPLE_LUNG_CANCER_PROMPT, TestContext};
use clinprompt::{AppError, GenerateOutcome, generate_prompt_at};

#[test]
fn public_api_renders_sample_prompt() {
    let ctx = TestContext::new();
    let config_path = ctx.write_config("");

    let outcome = generate_prompt_at(&config_path).expect("generation failed");

    assert_eq!(outcome.prompt().map(|p| p.as_str()), Some(SAMPLE_LUNG_CANCER_PROMPT));
}

#[test]
fn public_api_reports_no_patient_found() {
    let ctx = TestContext::new();
    let config_path = ctx.write_config("diagnosis: melanoma\n");

    let outcome = generate_prompt_at(&config_path).expect("generation failed");

    assert_eq!(outcome, GenerateOutcome::NoPatientFound { diagnosis: "melanoma".to_string() });
}

#[test]
fn public_api_surfaces_config_errors() {
    let ctx = TestContext::new();

    let err = generate_prompt_at(&ctx.path("config.yaml")).unwrap_err();

    assert!(matches!(err, AppError::ConfigMissing(_)));
}
