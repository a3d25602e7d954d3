use crate::harness::TestContext;

#[test]
fn yaml_document_lists_render_joined() {
    let ctx = TestContext::new();
    ctx.write_file(
        "records.yaml",
        "- BIRTHDATE: '1960-03-01'\n  GENDER: Male\n  \
         REASONDESCRIPTION: [Hypertension, Diabetes]\n  \
         observation: [High blood pressure, Elevated glucose]\n",
    );
    ctx.write_config(
        "diagnosis: diabetes\nrecords_path: records.yaml\n\
         prompt_template: '{age}; {conditions}; {observations}; {care_plans}'\n",
    );

    ctx.cli().assert().success().stdout(
        "64; Hypertension, Diabetes; High blood pressure, Elevated glucose; \
No care plans recorded\n",
    );
}

#[test]
fn json_document_is_accepted() {
    let ctx = TestContext::new();
    ctx.write_file(
        "records.json",
        r#"[{"birthdate": "1999-12-31", "sex": "Female", "diagnosis": "Migraine"}]"#,
    );
    ctx.write_config(
        "diagnosis: migraine\nrecords_path: records.json\nprompt_template: '{gender} {age}'\n",
    );

    ctx.cli().assert().success().stdout("Female 24\n");
}
