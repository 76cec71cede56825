use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Logos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Logos::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Logos::FileName).text().not_null())
                    .col(ColumnDef::new(Logos::StoragePath).text().not_null())
                    .col(
                        ColumnDef::new(Logos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one logo row.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_logos_singleton
                ON logos ((true));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_logos_singleton;")
            .await?;
        manager
            .drop_table(Table::drop().table(Logos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Logos {
    Table,
    Id,
    FileName,
    StoragePath,
    CreatedAt,
}
