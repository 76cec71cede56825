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
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Projects::UserId).uuid().not_null())
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(
                        ColumnDef::new(Projects::Tech)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(Projects::Github).text())
                    .col(ColumnDef::new(Projects::Demo).text())
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        owner_index::create(manager, "projects").await?;

        // Containment queries such as `tech @> '["Rust"]'`
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_tech
                ON projects USING GIN (tech);
                "#,
            )
            .await?;

        updated_at_trigger::create(manager, "projects").await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        updated_at_trigger::drop(manager, "projects").await?;
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_projects_tech;")
            .await?;
        owner_index::drop(manager, "projects").await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    UserId,
    Title,
    Description,
    Tech,
    Github,
    Demo,
    CreatedAt,
    UpdatedAt,
}
