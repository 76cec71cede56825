pub mod education_repository;

pub use education_repository::{
    CreateEducationData, EducationRepository, EducationRepositoryError, PatchEducationData,
};
