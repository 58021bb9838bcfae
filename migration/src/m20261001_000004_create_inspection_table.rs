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
                    .table(Inspection::Table)
                    .if_not_exists()
                    .col(pk_auto(Inspection::Id))
                    .col(string(Inspection::FormType))
                    .col(integer_null(Inspection::ContainerId))
                    .col(string(Inspection::Responsible))
                    .col(date(Inspection::VerificationDate))
                    .col(string(Inspection::Subject))
                    .col(string(Inspection::Status))
                    .col(boolean(Inspection::Damage))
                    .col(string_null(Inspection::DamageType))
                    .col(string_null(Inspection::CorrectiveAction))
                    .col(string(Inspection::InspectionType))
                    .col(json(Inspection::Items))
                    .col(text_null(Inspection::Notes))
                    .col(string(Inspection::SubmittedBy))
                    .col(string(Inspection::Role))
                    .col(timestamp_with_time_zone(Inspection::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inspection_container_id")
                            .from(Inspection::Table, Inspection::ContainerId)
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
                    .name("idx_inspection_form_type_created_at")
                    .table(Inspection::Table)
                    .col(Inspection::FormType)
                    .col(Inspection::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inspection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Inspection {
    Table,
    Id,
    FormType,
    ContainerId,
    Responsible,
    VerificationDate,
    Subject,
    Status,
    Damage,
    DamageType,
    CorrectiveAction,
    InspectionType,
    Items,
    Notes,
    SubmittedBy,
    Role,
    CreatedAt,
}
