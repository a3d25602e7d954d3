pub mod clock;
pub mod csv_record_source;
pub mod document_record_source;
pub mod memory_record_source;
pub mod template;

pub use clock::{FixedClock, SystemClock};
pub use csv_record_source::CsvRecordSource;
pub use document_record_source::DocumentRecordSource;
pub use memory_record_source::MemoryRecordSource;
pub use template::MinijinjaTemplateRenderer;
