use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_default_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: Config file not found").and(
            predicate::str::contains("config.yaml"),
        ));
}

#[test]
fn missing_explicit_config_names_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config_path", "absent.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));
}
