use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::contact::adapter::outgoing::sea_orm_entity::contacts::{
    self, ActiveModel, Column, Entity,
};
use crate::contact::application::ports::outgoing::{ContactRepository, ContactRepositoryError};
use crate::contact::domain::{Contact, ContactSubmission};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn list(&self) -> Result<Vec<Contact>, ContactRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_contact).collect())
    }

    async fn create(
        &self,
        submission: ContactSubmission,
    ) -> Result<Contact, ContactRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(submission.name().to_string()),
            email: Set(submission.email().to_string()),
            message: Set(submission.message().to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_contact(result))
    }
}

fn model_to_contact(model: contacts::Model) -> Contact {
    Contact {
        id: model.id,
        name: model.name,
        email: model.email,
        message: model.message,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}
