use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Container::Table)
                    .if_not_exists()
                    .col(pk_auto(Container::Id))
                    .col(string(Container::Name))
                    .col(string_null(Container::Location))
                    .col(string(Container::FormType))
                    .col(string(Container::CreatedBy))
                    .col(timestamp_with_time_zone(Container::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Container::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Container {
    Table,
    Id,
    Name,
    Location,
    FormType,
    CreatedBy,
    CreatedAt,
}
