use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError,
};
use crate::project::domain::Project;
use crate::shared::PatchField;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_project)
            .collect()
    }

    async fn create(&self, data: CreateProjectData) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            title: Set(data.title),
            description: Set(data.description),
            tech: Set(to_json(&data.tech)?),
            github: Set(data.github),
            demo: Set(data.demo),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchProjectData,
    ) -> Result<Project, ProjectRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }
        if let PatchField::Value(tech) = data.tech {
            model.tech = Set(to_json(&tech)?);
        }
        match data.github {
            PatchField::Value(github) => model.github = Set(Some(github)),
            PatchField::Null => model.github = Set(None),
            PatchField::Unset => {}
        }
        match data.demo {
            PatchField::Value(demo) => model.demo = Set(Some(demo)),
            PatchField::Null => model.demo = Set(None),
            PatchField::Unset => {}
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.tech.is_set()
            || model.github.is_set()
            || model.demo.is_set();

        if !has_changes {
            let current = Entity::find_by_id(id)
                .filter(Column::UserId.eq(owner_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_project(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)
            .and_then(model_to_project)
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ProjectRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        user_id: UserId::from(model.user_id),
        title: model.title,
        description: model.description,
        tech: serde_json::from_value(model.tech)
            .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))?,
        github: model.github,
        demo: model.demo,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json(values: &[String]) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(values)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(owner: Uuid, tech: serde_json::Value) -> projects::Model {
        let now = Utc::now().fixed_offset();

        projects::Model {
            id: Uuid::new_v4(),
            user_id: owner,
            title: "Portfolio CMS".to_string(),
            description: "Content backend".to_string(),
            tech,
            github: Some("https://github.com/example/portfolio".to_string()),
            demo: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_preserves_tech_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(
                Uuid::new_v4(),
                serde_json::json!(["Rust", "Actix", "Postgres"]),
            )]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let projects = repo.list().await.unwrap();

        assert_eq!(projects[0].tech, vec!["Rust", "Actix", "Postgres"]);
    }

    #[tokio::test]
    async fn test_non_array_tech_is_serialization_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(
                Uuid::new_v4(),
                serde_json::json!("Rust, Actix"),
            )]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert!(matches!(
            repo.list().await,
            Err(ProjectRepositoryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_returns_updated_row() {
        let owner = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model(owner, serde_json::json!(["Rust"]))]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let patch = PatchProjectData {
            tech: PatchField::Value(vec!["Rust".to_string()]),
            demo: PatchField::Null,
            ..Default::default()
        };

        let project = repo
            .patch(UserId::from(owner), Uuid::new_v4(), patch)
            .await
            .unwrap();

        assert_eq!(project.tech, vec!["Rust"]);
        assert!(project.demo.is_none());
    }

    #[tokio::test]
    async fn test_delete_matching_nothing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(UserId::from(Uuid::new_v4()), Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), ProjectRepositoryError::NotFound);
    }
}
