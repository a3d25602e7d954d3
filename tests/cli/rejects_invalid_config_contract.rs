use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn csv_source_without_path_names_missing_key() {
    let ctx = TestContext::new();
    ctx.write_config("record_source: csv\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("cleaned_data_csv_path"));
}

#[test]
fn unknown_key_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("database_path: patients.db\n");

    ctx.cli().assert().failure().stderr(predicate::str::contains("database_path"));
}

#[test]
fn unreadable_csv_reports_record_source() {
    let ctx = TestContext::new();
    ctx.write_config("cleaned_data_csv_path: missing.csv\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read patient records"));
}
