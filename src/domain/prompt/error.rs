use thiserror::Error;

/// Error while parsing or rendering a prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder outside the supported vocabulary.
    #[error(
        "Unsupported placeholder '{{{placeholder}}}' at position {position}; supported: {supported}"
    )]
    UnknownPlaceholder { placeholder: String, position: usize, supported: String },

    /// `{}` with no name.
    #[error("Empty placeholder '{{}}' at position {position}")]
    EmptyPlaceholder { position: usize },

    /// `{` with no matching `}`.
    #[error("Unterminated placeholder starting at position {position}")]
    UnterminatedPlaceholder { position: usize },

    /// Lone `}`; literal braces must be doubled.
    #[error("Unmatched '}}' at position {position}; write '}}}}' for a literal brace")]
    UnmatchedClosingBrace { position: usize },

    /// Rendering engine failure.
    #[error("Failed to render prompt template: {reason}")]
    RenderFailed { reason: String },
}
