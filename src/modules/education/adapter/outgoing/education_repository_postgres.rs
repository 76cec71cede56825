use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::domain::entities::UserId;
use crate::education::adapter::outgoing::sea_orm_entity::education::{
    self, ActiveModel, Column, Entity,
};
use crate::education::application::ports::outgoing::{
    CreateEducationData, EducationRepository, EducationRepositoryError, PatchEducationData,
};
use crate::education::domain::Education;
use crate::shared::PatchField;

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Education>, EducationRepositoryError> {
        Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_education)
            .collect()
    }

    async fn create(
        &self,
        data: CreateEducationData,
    ) -> Result<Education, EducationRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            degree: Set(data.degree),
            university: Set(data.university),
            duration: Set(data.duration),
            cgpa: Set(data.cgpa),
            achievements: Set(to_json(&data.achievements)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_education(result)
    }

    async fn patch(
        &self,
        owner: UserId,
        id: Uuid,
        data: PatchEducationData,
    ) -> Result<Education, EducationRepositoryError> {
        let owner_uuid: Uuid = owner.into();
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(degree) = data.degree {
            model.degree = Set(degree);
        }
        if let PatchField::Value(university) = data.university {
            model.university = Set(university);
        }
        if let PatchField::Value(duration) = data.duration {
            model.duration = Set(duration);
        }
        if let PatchField::Value(cgpa) = data.cgpa {
            model.cgpa = Set(cgpa);
        }
        if let PatchField::Value(achievements) = data.achievements {
            model.achievements = Set(to_json(&achievements)?);
        }

        let has_changes = model.degree.is_set()
            || model.university.is_set()
            || model.duration.is_set()
            || model.cgpa.is_set()
            || model.achievements.is_set();

        if !has_changes {
            let current = Entity::find_by_id(id)
                .filter(Column::UserId.eq(owner_uuid))
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(EducationRepositoryError::NotFound)?;

            return model_to_education(current);
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
            .ok_or(EducationRepositoryError::NotFound)
            .and_then(model_to_education)
    }

    async fn delete(&self, owner: UserId, id: Uuid) -> Result<(), EducationRepositoryError> {
        let owner_uuid: Uuid = owner.into();

        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.eq(owner_uuid))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EducationRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_education(model: education::Model) -> Result<Education, EducationRepositoryError> {
    Ok(Education {
        id: model.id,
        user_id: UserId::from(model.user_id),
        degree: model.degree,
        university: model.university,
        duration: model.duration,
        cgpa: model.cgpa,
        achievements: serde_json::from_value(model.achievements)
            .map_err(|e| EducationRepositoryError::SerializationError(e.to_string()))?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json(values: &[String]) -> Result<serde_json::Value, EducationRepositoryError> {
    serde_json::to_value(values)
        .map_err(|e| EducationRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> EducationRepositoryError {
    EducationRepositoryError::DatabaseError(e.to_string())
}
