pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_updated_at_function;
mod m20261001_000002_create_profiles_table;
mod m20261001_000003_create_experiences_table;
mod m20261001_000004_create_education_table;
mod m20261001_000005_create_skills_table;
mod m20261001_000006_create_projects_table;
mod m20261001_000007_create_contacts_table;
mod m20261001_000008_create_logos_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_updated_at_function::Migration),
            Box::new(m20261001_000002_create_profiles_table::Migration),
            Box::new(m20261001_000003_create_experiences_table::Migration),
            Box::new(m20261001_000004_create_education_table::Migration),
            Box::new(m20261001_000005_create_skills_table::Migration),
            Box::new(m20261001_000006_create_projects_table::Migration),
            Box::new(m20261001_000007_create_contacts_table::Migration),
            Box::new(m20261001_000008_create_logos_table::Migration),
        ]
    }
}

/// `BEFORE UPDATE` trigger that stamps `updated_at`.
pub(crate) mod updated_at_trigger {
    use sea_orm_migration::prelude::*;

    pub async fn create(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE TRIGGER update_{table}_updated_at \
                 BEFORE UPDATE ON {table} \
                 FOR EACH ROW EXECUTE FUNCTION update_updated_at_column();"
            ))
            .await?;
        Ok(())
    }

    pub async fn drop(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table};"
            ))
            .await?;
        Ok(())
    }
}

/// Rows are always filtered by their owner.
pub(crate) mod owner_index {
    use sea_orm_migration::prelude::*;

    pub async fn create(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE INDEX IF NOT EXISTS idx_{table}_user_id ON {table} (user_id);"
            ))
            .await?;
        Ok(())
    }

    pub async fn drop(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(&format!("DROP INDEX IF EXISTS idx_{table}_user_id;"))
            .await?;
        Ok(())
    }
}
