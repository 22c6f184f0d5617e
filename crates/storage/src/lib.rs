#![warn(clippy::pedantic)]

use hybrid_domain as domain;

pub mod json;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Configuration(#[from] domain::ConfigurationError),
    #[error(transparent)]
    Block(#[from] domain::BlockIDError),
    #[error(transparent)]
    Muscle(#[from] domain::MuscleError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    RPE(#[from] domain::RPEError),
    #[error(transparent)]
    TechniqueKind(#[from] domain::TechniqueKindError),
    #[error("invalid program: {}", .0.messages().join("; "))]
    InvalidProgram(domain::Validation),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
