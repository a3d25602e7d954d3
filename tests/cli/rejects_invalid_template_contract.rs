use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_placeholder_is_named() {
    let ctx = TestContext::new();
    ctx.write_config("prompt_template: 'Patient {name} aged {age}'\n");

    ctx.cli()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("name"));
}

#[test]
fn escaped_braces_render_literally() {
    let ctx = TestContext::new();
    ctx.write_config("prompt_template: '{{age}} = {age}'\n");

    ctx.cli().assert().success().stdout("{age} = 34\n");
}

#[test]
fn jinja_block_syntax_in_literal_renders_verbatim() {
    let ctx = TestContext::new();
    ctx.write_config("prompt_template: 'Growth {{%}} for age {age}'\n");

    ctx.cli().assert().success().stdout("Growth {%} for age 34\n");
}
