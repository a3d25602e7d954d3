pub mod matcher;

pub use matcher::{Selection, SelectionCriteria, match_patients, select_patient};
