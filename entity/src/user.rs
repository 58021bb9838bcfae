use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Stored lowercased.
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    /// One of `gerente`, `tecnico`, `auditor`. Anything else is treated as unauthenticated.
    pub role: String,
    /// Argon2id PHC string. Users without one can only sign in with a one-time code.
    pub password_hash: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
