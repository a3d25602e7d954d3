use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn malformed_birth_date_fails_naming_field() {
    let ctx = TestContext::new();
    ctx.write_file("cleaned.csv", "BIRTHDATE,REASONDESCRIPTION\n15/06/1970,lung cancer\n");
    ctx.write_config("cleaned_data_csv_path: cleaned.csv\n");

    ctx.cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("birth_date").and(predicate::str::contains("15/06/1970")));
}
