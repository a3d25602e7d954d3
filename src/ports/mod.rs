mod clock;
mod record_source;

pub use clock::Clock;
pub use record_source::RecordSource;
