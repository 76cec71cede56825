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
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Skills::UserId).uuid().not_null())
                    .col(ColumnDef::new(Skills::Name).text().not_null())
                    .col(
                        ColumnDef::new(Skills::Level)
                            .integer()
                            .not_null()
                            .check(Expr::col(Skills::Level).between(0, 100)),
                    )
                    .col(
                        ColumnDef::new(Skills::Category)
                            .text()
                            .not_null()
                            .check(Expr::col(Skills::Category).is_in(["language", "framework"])),
                    )
                    .col(
                        ColumnDef::new(Skills::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Skills::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        owner_index::create(manager, "skills").await?;
        updated_at_trigger::create(manager, "skills").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        updated_at_trigger::drop(manager, "skills").await?;
        owner_index::drop(manager, "skills").await?;
        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    UserId,
    Name,
    Level,
    Category,
    CreatedAt,
    UpdatedAt,
}
