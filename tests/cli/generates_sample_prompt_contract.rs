use crate::harness::{SAMPLE_LUNG_CANCER_PROMPT, TestContext};
use predicates::prelude::*;

#[test]
fn generate_uses_config_yaml_in_working_directory() {
    let ctx = TestContext::new();
    ctx.write_config("");

    ctx.cli()
        .assert()
        .success()
        .stdout(format!("{}\n", SAMPLE_LUNG_CANCER_PROMPT))
        .stderr(predicate::str::is_empty());
}

#[test]
fn generate_accepts_explicit_config_path() {
    let ctx = TestContext::new();
    ctx.write_file(
        "conf/run.yaml",
        "diagnosis: ''\nreference_date: 2024-06-15\n\
         prompt_template: '{gender}, {age}, {modality}'\n",
    );

    ctx.cli()
        .args(["--config_path", "conf/run.yaml"])
        .assert()
        .success()
        .stdout("Female, 39, CT Scan\n");
}
