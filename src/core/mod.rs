pub mod diagnosis;
pub mod engine;
pub mod meaning;
pub mod report;

pub use crate::domain::model::{
    Category, CompatibilityResult, NumerologyProfile, PairDiagnosis, PersonInput, RelationLabel,
    SelfDiagnosis,
};
pub use crate::utils::error::Result;
