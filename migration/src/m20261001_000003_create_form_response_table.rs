use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_container_table::Container;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormResponse::Table)
                    .if_not_exists()
                    .col(pk_auto(FormResponse::Id))
                    .col(integer_null(FormResponse::ContainerId))
                    .col(string(FormResponse::ContainerName))
                    .col(string_null(FormResponse::ContainerLocation))
                    .col(json_null(FormResponse::Answers))
                    .col(text_null(FormResponse::AuditorComment))
                    .col(string(FormResponse::SubmittedBy))
                    .col(string(FormResponse::Role))
                    .col(timestamp_with_time_zone(FormResponse::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_response_container_id")
                            .from(FormResponse::Table, FormResponse::ContainerId)
                            .to(Container::Table, Container::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_form_response_created_at")
                    .table(FormResponse::Table)
                    .col(FormResponse::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormResponse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FormResponse {
    Table,
    Id,
    ContainerId,
    ContainerName,
    ContainerLocation,
    Answers,
    AuditorComment,
    SubmittedBy,
    Role,
    CreatedAt,
}
