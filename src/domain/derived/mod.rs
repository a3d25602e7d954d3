pub mod age;
pub mod defaults;
pub mod selected;

pub use age::{age_from_birth_date, age_on, parse_birth_date};
pub use defaults::DefaultTexts;
pub use selected::{SelectedPatient, derive_patient};
