use minijinja::{Environment, UndefinedBehavior};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::prompt::{
    PromptContext, PromptTemplate, Segment, TemplateError, TemplateRenderer,
};

const LITERAL_PREFIX: &str = "__literal_";

/// Template renderer using Minijinja.
///
/// Parsed `{name}` templates are lowered to Jinja source made only of
/// expressions: placeholders become `{{ name }}`, literal segments are bound
/// as extra variables so their text never reaches the Jinja parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &PromptTemplate,
        context: &PromptContext,
    ) -> Result<String, TemplateError> {
        let (source, literals) = lower(template);
        let mut variables: HashMap<&str, &str> =
            context.variables.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();
        variables.extend(literals.iter().map(|(name, text)| (name.as_str(), *text)));

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_keep_trailing_newline(true);
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(&source, &variables)
            .map_err(|err| TemplateError::RenderFailed { reason: err.to_string() })
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Jinja source plus the literal bindings it references.
fn lower(template: &PromptTemplate) -> (String, Vec<(String, &str)>) {
    let mut source = String::new();
    let mut literals = Vec::new();
    for segment in template.segments() {
        let name = match segment {
            Segment::Literal(text) => {
                let name = format!("{}{}", LITERAL_PREFIX, literals.len());
                literals.push((name.clone(), text.as_str()));
                name
            }
            Segment::Placeholder(placeholder) => placeholder.name().to_string(),
        };
        source.push_str("{{ ");
        source.push_str(&name);
        source.push_str(" }}");
    }
    (source, literals)
}
