pub use sea_orm_migration::prelude::*;

mod m20250310_000001_create_registry_schema;

pub struct RegistryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for RegistryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250310_000001_create_registry_schema::Migration)]
    }
}
