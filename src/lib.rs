pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{CliConfig, OutputFormat};
pub use crate::core::{diagnosis, engine, meaning, report};
pub use crate::domain::model::{
    Category, CompatibilityResult, NumerologyProfile, PairDiagnosis, PersonInput, Reading,
    RelationLabel, SelfDiagnosis,
};
pub use crate::utils::error::{NumerologyError, Result};
