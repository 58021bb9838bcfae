use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "container")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: Option<String>,
    /// Slug of the checklist page this container is inspected with.
    pub form_type: String,
    /// Email of the manager who created the container.
    pub created_by: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_response::Entity")]
    FormResponse,
    #[sea_orm(has_many = "super::inspection::Entity")]
    Inspection,
}

impl Related<super::form_response::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormResponse.def()
    }
}

impl Related<super::inspection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inspection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
