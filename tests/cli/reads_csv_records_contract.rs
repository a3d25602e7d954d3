use crate::harness::TestContext;

const CLEANED_CSV: &str = "\
BIRTHDATE,GENDER,REASONDESCRIPTION,observation,DESCRIPTION_careplan,modality,body_area
1970-06-15,F,Malignant neoplasm of breast,Palpable mass,Chemotherapy,Mammography,Breast
1980-01-01,M,Acute bronchitis,Cough,Rest,,
";

#[test]
fn csv_source_renders_matching_row() {
    let ctx = TestContext::new();
    ctx.write_file("data/cleaned.csv", CLEANED_CSV);
    ctx.write_config(
        "diagnosis: NEOPLASM\ncleaned_data_csv_path: data/cleaned.csv\n\
         prompt_template: '{age}|{gender}|{conditions}|{observations}|{care_plans}|{modality}|\
         {body_area}'\n",
    );

    ctx.cli()
        .assert()
        .success()
        .stdout("54|F|Malignant neoplasm of breast|Palpable mass|Chemotherapy|Mammography|\
Breast\n");
}

#[test]
fn csv_source_fills_blank_columns_with_defaults() {
    let ctx = TestContext::new();
    ctx.write_file("cleaned.csv", CLEANED_CSV);
    ctx.write_config(
        "diagnosis: bronchitis\ncleaned_data_csv_path: cleaned.csv\n\
         prompt_template: '{age} {modality}/{body_area}'\n",
    );

    ctx.cli().assert().success().stdout("44 Not specified/Not specified\n");
}

#[test]
fn csv_headers_match_ignoring_case() {
    let ctx = TestContext::new();
    ctx.write_file(
        "cleaned.csv",
        "Birthdate,Gender,ReasonDescription,Modality\n1990-01-01,Male,Lung cancer,X-Ray\n",
    );
    ctx.write_config(
        "cleaned_data_csv_path: cleaned.csv\n\
         prompt_template: '{age} {gender} {conditions} {modality}'\n",
    );

    ctx.cli().assert().success().stdout("34 Male Lung cancer X-Ray\n");
}
