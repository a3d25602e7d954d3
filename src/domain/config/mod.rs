pub mod model;
pub mod parse;

pub use model::{CSV_PATH_KEY, PromptConfig, RECORDS_PATH_KEY, RecordSourceKind};
pub use parse::parse_config_content;
