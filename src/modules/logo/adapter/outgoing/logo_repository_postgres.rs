use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::logo::adapter::outgoing::sea_orm_entity::logos::{self, ActiveModel, Column, Entity};
use crate::logo::application::ports::outgoing::{
    LogoRepository, LogoRepositoryError, NewLogoRecord,
};
use crate::logo::domain::Logo;

#[derive(Clone)]
pub struct LogoRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LogoRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LogoRepository for LogoRepositoryPostgres {
    async fn current(&self) -> Result<Option<Logo>, LogoRepositoryError> {
        let row = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(model_to_logo))
    }

    async fn all(&self) -> Result<Vec<Logo>, LogoRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_logo).collect())
    }

    async fn create(&self, record: NewLogoRecord) -> Result<Logo, LogoRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            file_name: Set(record.file_name),
            storage_path: Set(record.storage_path),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_logo(result))
    }

    async fn delete(&self, id: Uuid) -> Result<(), LogoRepositoryError> {
        // Nothing to do for a row that is already gone.
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn model_to_logo(model: logos::Model) -> Logo {
    Logo {
        id: model.id,
        file_name: model.file_name,
        storage_path: model.storage_path,
        created_at: model.created_at.into(),
    }
}

fn map_db_err(e: DbErr) -> LogoRepositoryError {
    LogoRepositoryError::DatabaseError(e.to_string())
}
