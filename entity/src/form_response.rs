use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "form_response")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Cleared when the container is deleted; the name and location copies keep the row readable.
    pub container_id: Option<i32>,
    pub container_name: String,
    pub container_location: Option<String>,
    /// Question id to answer map. Null when the row is an auditor comment.
    pub answers: Option<Json>,
    /// Null when the row carries answers.
    pub auditor_comment: Option<String>,
    pub submitted_by: String,
    pub role: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::container::Entity",
        from = "Column::ContainerId",
        to = "super::container::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Container,
}

impl Related<super::container::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Container.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
