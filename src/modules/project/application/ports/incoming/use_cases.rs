use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::project::domain::Project;
use crate::shared::{ContentError, ListInput, PatchField};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    /// List or comma separated string.
    #[serde(default)]
    pub tech: ListInput,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct ProjectChanges {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<ListInput>)]
    pub tech: PatchField<ListInput>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub demo: PatchField<String>,
}

/// A full edit form: every field is replaced.
impl From<NewProject> for ProjectChanges {
    fn from(input: NewProject) -> Self {
        Self {
            title: PatchField::Value(input.title),
            description: PatchField::Value(input.description),
            tech: PatchField::Value(input.tech),
            github: input.github.into(),
            demo: input.demo.into(),
        }
    }
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, ContentError>;
}

#[async_trait]
pub trait AddProjectUseCase: Send + Sync {
    async fn execute(&self, input: NewProject) -> Result<Project, ContentError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, changes: ProjectChanges) -> Result<Project, ContentError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}
