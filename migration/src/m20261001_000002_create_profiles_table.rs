use sea_orm_migration::prelude::*;

use crate::updated_at_trigger;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton row keyed by the owner's auth user id
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Profiles::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Profiles::FullName).text().not_null())
                    .col(
                        ColumnDef::new(Profiles::Title)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Profiles::Github).text())
                    .col(ColumnDef::new(Profiles::Linkedin).text())
                    .col(ColumnDef::new(Profiles::Email).text())
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        updated_at_trigger::create(manager, "profiles").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        updated_at_trigger::drop(manager, "profiles").await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    FullName,
    Title,
    Github,
    Linkedin,
    Email,
    UpdatedAt,
}
