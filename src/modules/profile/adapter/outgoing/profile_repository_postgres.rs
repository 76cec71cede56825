use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::profile::adapter::outgoing::sea_orm_entity::profiles::{
    self, ActiveModel, Column, Entity,
};
use crate::profile::application::ports::outgoing::{
    ProfileData, ProfileRepository, ProfileRepositoryError,
};
use crate::profile::domain::Profile;
use crate::shared::{normalize_list, ListInput, SLASH};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        Entity::find()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_profile)
            .transpose()
    }

    async fn update(
        &self,
        owner: UserId,
        data: ProfileData,
    ) -> Result<Profile, ProfileRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let model = ActiveModel {
            full_name: Set(data.full_name),
            title: Set(serde_json::to_value(&data.title)
                .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))?),
            github: Set(data.github),
            linkedin: Set(data.linkedin),
            email: Set(data.email),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(owner_uuid))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ProfileRepositoryError::NotFound)
            .and_then(model_to_profile)
    }
}

fn model_to_profile(model: profiles::Model) -> Result<Profile, ProfileRepositoryError> {
    Ok(Profile {
        id: model.id,
        full_name: model.full_name,
        title: titles_from_json(model.title)?,
        github: model.github,
        linkedin: model.linkedin,
        email: model.email,
        updated_at: model.updated_at.into(),
    })
}

/// Rows written before titles became an array hold a `/` separated string.
fn titles_from_json(value: serde_json::Value) -> Result<Vec<String>, ProfileRepositoryError> {
    match value {
        serde_json::Value::String(raw) => Ok(normalize_list(ListInput::Delimited(raw), SLASH)),
        serde_json::Value::Null => Ok(Vec::new()),
        other => serde_json::from_value(other)
            .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string())),
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}
