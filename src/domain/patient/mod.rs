pub mod aliases;
pub mod normalize;
pub mod record;

pub use aliases::{CanonicalField, FieldAliases};
pub use normalize::{NormalizedPatient, normalize, normalize_all};
pub use record::{FieldValue, PatientRecord};
