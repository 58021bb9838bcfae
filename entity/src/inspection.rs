use sea_orm::entity::prelude::*;

/// Maintenance execution, vehicle and vessel checklists share this table and are told apart by
/// `form_type`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inspection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_type: String,
    pub container_id: Option<i32>,
    pub responsible: String,
    pub verification_date: Date,
    /// Equipment, vehicle or vessel identification depending on `form_type`.
    pub subject: String,
    pub status: String,
    pub damage: bool,
    pub damage_type: Option<String>,
    pub corrective_action: Option<String>,
    pub inspection_type: String,
    /// JSON array of inspected item labels.
    pub items: Json,
    pub notes: Option<String>,
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
