use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::{ContentError, PatchField};
use crate::skill::domain::{Skill, SkillCategory};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewSkill {
    pub name: String,
    #[schema(minimum = 0, maximum = 100)]
    pub level: i32,
    pub category: SkillCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct SkillChanges {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub level: PatchField<i32>,
    #[serde(default)]
    #[schema(value_type = Option<SkillCategory>)]
    pub category: PatchField<SkillCategory>,
}

impl From<NewSkill> for SkillChanges {
    fn from(input: NewSkill) -> Self {
        Self {
            name: PatchField::Value(input.name),
            level: PatchField::Value(input.level),
            category: PatchField::Value(input.category),
        }
    }
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Skill>, ContentError>;
}

#[async_trait]
pub trait AddSkillUseCase: Send + Sync {
    async fn execute(&self, input: NewSkill) -> Result<Skill, ContentError>;
}

#[async_trait]
pub trait UpdateSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, changes: SkillChanges) -> Result<Skill, ContentError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
