use std::fmt;

use super::error::TemplateError;

/// Built-in prompt template used when configuration supplies none.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Diagnosis: {diagnosis}. Patient's age: {age}. \
Gender: {gender}. Conditions: {conditions}. Observations: {observations}. \
Care plans: {care_plans}. Imaging modality: {modality}. Body area: {body_area}. \
Please provide a comprehensive report based on the patient's data and imaging results.";

/// The fixed placeholder vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    Diagnosis,
    Age,
    Gender,
    Conditions,
    Observations,
    CarePlans,
    Modality,
    BodyArea,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::Diagnosis,
        Placeholder::Age,
        Placeholder::Gender,
        Placeholder::Conditions,
        Placeholder::Observations,
        Placeholder::CarePlans,
        Placeholder::Modality,
        Placeholder::BodyArea,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Diagnosis => "diagnosis",
            Placeholder::Age => "age",
            Placeholder::Gender => "gender",
            Placeholder::Conditions => "conditions",
            Placeholder::Observations => "observations",
            Placeholder::CarePlans => "care_plans",
            Placeholder::Modality => "modality",
            Placeholder::BodyArea => "body_area",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|placeholder| placeholder.name() == name)
    }

    fn vocabulary() -> String {
        Self::ALL.iter().map(|placeholder| placeholder.name()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Prompt template parsed from `{name}` syntax.
///
/// `{{` and `}}` stand for literal braces. Every placeholder is checked
/// against the fixed vocabulary at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_PROMPT_TEMPLATE).expect("Built-in prompt template must parse")
    }
}

impl PromptTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' => {
                    if chars.next_if(|&(_, next)| next == '{').is_some() {
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        match next {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => break,
                            other => name.push(other),
                        }
                    }
                    if !closed {
                        return Err(TemplateError::UnterminatedPlaceholder { position });
                    }
                    if name.is_empty() {
                        return Err(TemplateError::EmptyPlaceholder { position });
                    }
                    let placeholder = Placeholder::from_name(&name).ok_or_else(|| {
                        TemplateError::UnknownPlaceholder {
                            placeholder: name.clone(),
                            position,
                            supported: Placeholder::vocabulary(),
                        }
                    })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(placeholder));
                }
                '}' => {
                    if chars.next_if(|&(_, next)| next == '}').is_none() {
                        return Err(TemplateError::UnmatchedClosingBrace { position });
                    }
                    literal.push('}');
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { source: source.to_string(), segments })
    }

    /// Template text as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholders in order of appearance, repeats included.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }
}
