use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::education::domain::Education;
use crate::shared::{ContentError, ListInput, PatchField};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewEducation {
    pub degree: String,
    pub university: String,
    pub duration: String,
    pub cgpa: String,
    /// List or comma separated string.
    #[serde(default)]
    pub achievements: ListInput,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct EducationChanges {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub degree: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub university: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub duration: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub cgpa: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<ListInput>)]
    pub achievements: PatchField<ListInput>,
}

/// A full edit form: every field is replaced.
impl From<NewEducation> for EducationChanges {
    fn from(input: NewEducation) -> Self {
        Self {
            degree: PatchField::Value(input.degree),
            university: PatchField::Value(input.university),
            duration: PatchField::Value(input.duration),
            cgpa: PatchField::Value(input.cgpa),
            achievements: PatchField::Value(input.achievements),
        }
    }
}

#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Education>, ContentError>;
}

#[async_trait]
pub trait AddEducationUseCase: Send + Sync {
    async fn execute(&self, input: NewEducation) -> Result<Education, ContentError>;
}

#[async_trait]
pub trait UpdateEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, changes: EducationChanges)
        -> Result<Education, ContentError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
