use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::experience::adapter::outgoing::sea_orm_entity::experiences::{
    self, ActiveModel, Column, Entity,
};
use crate::experience::application::ports::outgoing::{
    CreateExperienceData, ExperienceRepository, ExperienceRepositoryError, PatchExperienceData,
};
use crate::experience::domain::Experience;
use crate::shared::PatchField;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Experience>, ExperienceRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_experience)
            .collect()
    }

    async fn create(
        &self,
        data: CreateExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            title: Set(data.title),
            company: Set(data.company),
            duration: Set(data.duration),
            description: Set(data.description),
            location: Set(data.location),
            achievements: Set(to_json(&data.achievements)?),
            tech: Set(to_json(&data.tech)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_experience(result)
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchExperienceData,
    ) -> Result<Experience, ExperienceRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = data.title {
            model.title = Set(title);
        }
        if let PatchField::Value(company) = data.company {
            model.company = Set(company);
        }
        if let PatchField::Value(duration) = data.duration {
            model.duration = Set(duration);
        }

        match data.description {
            PatchField::Unset => {}
            PatchField::Null => model.description = Set(None),
            PatchField::Value(v) => model.description = Set(Some(v)),
        }

        match data.location {
            PatchField::Unset => {}
            PatchField::Null => model.location = Set(None),
            PatchField::Value(v) => model.location = Set(Some(v)),
        }

        if let PatchField::Value(achievements) = data.achievements {
            model.achievements = Set(to_json(&achievements)?);
        }
        if let PatchField::Value(tech) = data.tech {
            model.tech = Set(to_json(&tech)?);
        }

        let has_changes = model.title.is_set()
            || model.company.is_set()
            || model.duration.is_set()
            || model.description.is_set()
            || model.location.is_set()
            || model.achievements.is_set()
            || model.tech.is_set();

        if !has_changes {
            let current = Entity::find_by_id(id)
                .filter(Column::UserId.eq(owner_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ExperienceRepositoryError::NotFound)?;

            return model_to_experience(current);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ExperienceRepositoryError::NotFound)?;

        model_to_experience(result)
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), ExperienceRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ExperienceRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_experience(
    model: experiences::Model,
) -> Result<Experience, ExperienceRepositoryError> {
    Ok(Experience {
        id: model.id,
        user_id: UserId::from(model.user_id),
        title: model.title,
        company: model.company,
        duration: model.duration,
        description: model.description,
        location: model.location,
        achievements: from_json(&model.achievements)?,
        tech: from_json(&model.tech)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ExperienceRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ExperienceRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ExperienceRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ExperienceRepositoryError {
    ExperienceRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
