pub mod skill_repository;

pub use skill_repository::{
    CreateSkillData, PatchSkillData, SkillRepository, SkillRepositoryError,
};
