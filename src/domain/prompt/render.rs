use std::fmt;

use crate::domain::AppError;
use crate::domain::derived::SelectedPatient;

use super::context::PromptContext;
use super::error::TemplateError;
use super::template::PromptTemplate;

/// Trait for rendering parsed templates.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with the values in `context`.
    ///
    /// Callers guarantee that every placeholder used by `template` has a value.
    fn render(
        &self,
        template: &PromptTemplate,
        context: &PromptContext,
    ) -> Result<String, TemplateError>;
}

/// Final prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt(String);

impl RenderedPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RenderedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render the prompt for `patient` and the `diagnosis` query.
pub fn render_prompt<T: TemplateRenderer + ?Sized>(
    renderer: &T,
    template: &PromptTemplate,
    patient: &SelectedPatient,
    diagnosis: &str,
) -> Result<RenderedPrompt, AppError> {
    let context = PromptContext::for_patient(patient, diagnosis);
    render_with_context(renderer, template, &context)
}

/// Render with an explicit context, checking every placeholder resolves first.
pub fn render_with_context<T: TemplateRenderer + ?Sized>(
    renderer: &T,
    template: &PromptTemplate,
    context: &PromptContext,
) -> Result<RenderedPrompt, AppError> {
    if let Some(missing) = template.placeholders().find(|p| context.get(*p).is_none()) {
        return Err(AppError::MissingField { field: missing.name().to_string() });
    }

    let content = renderer.render(template, context)?;
    Ok(RenderedPrompt(content))
}
