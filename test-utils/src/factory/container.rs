//! Container factory for creating test container entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test containers.
///
/// Defaults to a `containerForm` container at `"Pátio {id}"` created by `gerente@example.com`.
pub struct ContainerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    form_type: String,
    created_by: String,
}

impl<'a> ContainerFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Container {}", id),
            location: Some(format!("Pátio {}", id)),
            form_type: "containerForm".to_string(),
            created_by: "gerente@example.com".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    /// Sets the stored form type slug (e.g. `"inspecaoVeicular"`).
    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = form_type.into();
        self
    }

    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub async fn build(self) -> Result<entity::container::Model, DbErr> {
        entity::container::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            form_type: ActiveValue::Set(self.form_type),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a container with default values.
pub async fn create_container(db: &DatabaseConnection) -> Result<entity::container::Model, DbErr> {
    ContainerFactory::new(db).build().await
}
