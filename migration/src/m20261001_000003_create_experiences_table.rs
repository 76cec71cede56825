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
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Experiences::UserId).uuid().not_null())
                    .col(ColumnDef::new(Experiences::Title).text().not_null())
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::Duration).text().not_null())
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(ColumnDef::new(Experiences::Location).text())
                    .col(
                        ColumnDef::new(Experiences::Achievements)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Experiences::Tech)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Experiences::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        owner_index::create(manager, "experiences").await?;
        updated_at_trigger::create(manager, "experiences").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        updated_at_trigger::drop(manager, "experiences").await?;
        owner_index::drop(manager, "experiences").await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    UserId,
    Title,
    Company,
    Duration,
    Description,
    Location,
    Achievements,
    Tech,
    CreatedAt,
    UpdatedAt,
}
