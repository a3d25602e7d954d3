use crate::harness::TestContext;

#[test]
fn unmatched_diagnosis_prints_notice_and_succeeds() {
    let ctx = TestContext::new();
    ctx.write_config("diagnosis: melanoma\n");

    ctx.cli().assert().success().stdout("No patient data found for the given diagnosis.\n");
}

#[test]
fn empty_csv_prints_notice_for_blank_query() {
    let ctx = TestContext::new();
    ctx.write_file("cleaned.csv", "BIRTHDATE,GENDER,REASONDESCRIPTION\n");
    ctx.write_config("diagnosis: ''\ncleaned_data_csv_path: cleaned.csv\n");

    ctx.cli().assert().success().stdout("No patient data found for the given diagnosis.\n");
}
