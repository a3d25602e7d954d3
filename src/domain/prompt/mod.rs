pub mod context;
pub mod error;
pub mod render;
pub mod template;

pub use context::PromptContext;
pub use error::TemplateError;
pub use render::{RenderedPrompt, TemplateRenderer, render_prompt, render_with_context};
pub use template::{DEFAULT_PROMPT_TEMPLATE, Placeholder, PromptTemplate, Segment};
