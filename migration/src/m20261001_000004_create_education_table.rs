use sea_orm_migration::prelude::*;

use crate::{owner_index, updated_at_trigger};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Education::UserId).uuid().not_null())
                    .col(ColumnDef::new(Education::Degree).text().not_null())
                    .col(ColumnDef::new(Education::University).text().not_null())
                    .col(ColumnDef::new(Education::Duration).text().not_null())
                    .col(ColumnDef::new(Education::Cgpa).text().not_null())
                    .col(
                        ColumnDef::new(Education::Achievements)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Education::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        owner_index::create(manager, "education").await?;
        updated_at_trigger::create(manager, "education").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        updated_at_trigger::drop(manager, "education").await?;
        owner_index::drop(manager, "education").await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    UserId,
    Degree,
    University,
    Duration,
    Cgpa,
    Achievements,
    CreatedAt,
    UpdatedAt,
}
