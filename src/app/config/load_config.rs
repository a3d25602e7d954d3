//! Prompt configuration loading from the filesystem.

use std::fs;
use std::path::Path;

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, PromptConfig};

/// Load, parse and validate the configuration at `config_path`.
///
/// Relative record paths are resolved against the config file's directory.
pub fn load_config(config_path: &Path) -> Result<PromptConfig, AppError> {
    if !config_path.is_file() {
        return Err(AppError::ConfigMissing(config_path.display().to_string()));
    }

    let content = fs::read_to_string(config_path)?;
    let config = parse_config_content(&content)?;
    let base = config_path.parent().unwrap_or(Path::new("."));
    Ok(config.resolve_paths(base))
}
