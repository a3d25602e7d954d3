//! Pure parse/validate for prompt configuration (`config.yaml`).

use crate::domain::AppError;

use super::model::PromptConfig;

/// Parse and validate prompt configuration from YAML content.
///
/// An empty or comment-only document yields the default configuration.
pub fn parse_config_content(content: &str) -> Result<PromptConfig, AppError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let config: PromptConfig = if value.is_null() {
        PromptConfig::default()
    } else {
        serde_yaml::from_value(value)?
    };
    config.validate()?;
    Ok(config)
}
