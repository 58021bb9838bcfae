pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_container_table;
mod m20261001_000003_create_form_response_table;
mod m20261001_000004_create_inspection_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_container_table::Migration),
            Box::new(m20261001_000003_create_form_response_table::Migration),
            Box::new(m20261001_000004_create_inspection_table::Migration),
        ]
    }
}
