use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::experience::domain::Experience;
use crate::shared::{ContentError, ListInput, PatchField};

//
// ──────────────────────────────────────────────────────────
// Inputs
// ──────────────────────────────────────────────────────────
//

/// `achievements` and `tech` take a list or a comma separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewExperience {
    #[schema(example = "Engineer")]
    pub title: String,
    #[schema(example = "Acme")]
    pub company: String,
    #[schema(example = "2022-2023")]
    pub duration: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub achievements: ListInput,
    #[serde(default)]
    #[schema(example = "Go, SQL")]
    pub tech: ListInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ExperienceChanges {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub company: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub duration: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<ListInput>)]
    pub achievements: PatchField<ListInput>,
    #[serde(default)]
    #[schema(value_type = Option<ListInput>, example = "Go, SQL, Rust")]
    pub tech: PatchField<ListInput>,
}

/// A full edit form: every field is replaced.
impl From<NewExperience> for ExperienceChanges {
    fn from(input: NewExperience) -> Self {
        Self {
            title: PatchField::Value(input.title),
            company: PatchField::Value(input.company),
            duration: PatchField::Value(input.duration),
            description: input.description.into(),
            location: input.location.into(),
            achievements: PatchField::Value(input.achievements),
            tech: PatchField::Value(input.tech),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Experience>, ContentError>;
}

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(&self, input: NewExperience) -> Result<Experience, ContentError>;
}

#[async_trait]
pub trait UpdateExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        changes: ExperienceChanges,
    ) -> Result<Experience, ContentError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
