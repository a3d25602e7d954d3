use crate::domain::{AppError, PatientRecord};

/// Port for obtaining the candidate patient records.
///
/// Implementations read their backing store once per call and hand back an
/// owned snapshot; nothing downstream keeps a reference into the source.
pub trait RecordSource {
    /// Fetch every record the source holds.
    fn fetch_all(&self) -> Result<Vec<PatientRecord>, AppError>;

    /// Human-readable origin, used in log events.
    fn describe(&self) -> String;
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn fetch_all(&self) -> Result<Vec<PatientRecord>, AppError> {
        (**self).fetch_all()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
