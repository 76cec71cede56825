pub mod experience_repository;

pub use experience_repository::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, PatchExperienceData,
};
