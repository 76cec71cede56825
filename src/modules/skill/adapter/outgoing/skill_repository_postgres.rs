use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::shared::PatchField;
use crate::skill::adapter::outgoing::sea_orm_entity::skills::{
    self, ActiveModel, Column, Entity,
};
use crate::skill::application::ports::outgoing::{
    CreateSkillData, PatchSkillData, SkillRepository, SkillRepositoryError,
};
use crate::skill::domain::{Skill, SkillCategory};

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Skill>, SkillRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_skill)
            .collect()
    }

    async fn create(&self, data: CreateSkillData) -> Result<Skill, SkillRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            name: Set(data.name),
            level: Set(data.level),
            category: Set(data.category.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_skill(result)
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchSkillData,
    ) -> Result<Skill, SkillRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }
        if let PatchField::Value(level) = data.level {
            model.level = Set(level);
        }
        if let PatchField::Value(category) = data.category {
            model.category = Set(category.as_str().to_string());
        }

        let has_changes =
            model.name.is_set() || model.level.is_set() || model.category.is_set();

        if !has_changes {
            let current = Entity::find_by_id(id)
                .filter(Column::UserId.eq(owner_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(SkillRepositoryError::NotFound)?;

            return model_to_skill(current);
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
            .ok_or(SkillRepositoryError::NotFound)
            .and_then(model_to_skill)
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), SkillRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_skill(model: skills::Model) -> Result<Skill, SkillRepositoryError> {
    let category = model
        .category
        .parse::<SkillCategory>()
        .map_err(|e| SkillRepositoryError::SerializationError(e.to_string()))?;

    Ok(Skill {
        id: model.id,
        user_id: UserId::from(model.user_id),
        name: model.name,
        level: model.level,
        category,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn mock_model(category: &str) -> skills::Model {
        let now = Utc::now().fixed_offset();

        skills::Model {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Rust".to_string(),
            level: 90,
            category: category.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_parses_category() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("framework")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skills = repo.list().await.unwrap();

        assert_eq!(skills[0].category, SkillCategory::Framework);
    }

    #[tokio::test]
    async fn test_unknown_stored_category_is_serialization_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("tooling")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.list().await;

        assert!(matches!(
            result,
            Err(SkillRepositoryError::SerializationError(_))
        ));
    }

    #[tokio::test]
    async fn test_create_returns_inserted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![mock_model("language")]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo
            .create(CreateSkillData {
                owner: UserId::from(Uuid::new_v4()),
                name: "Rust".to_string(),
                level: 90,
                category: SkillCategory::Language,
            })
            .await
            .unwrap();

        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.level, 90);
    }

    #[tokio::test]
    async fn test_delete_matching_nothing_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.delete(UserId::from(Uuid::new_v4()), Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err(), SkillRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let result = repo.list().await;

        assert!(matches!(
            result,
            Err(SkillRepositoryError::DatabaseError(msg)) if msg.contains("connection reset")
        ));
    }
}
