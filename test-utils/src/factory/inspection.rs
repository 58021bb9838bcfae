//! Inspection factory covering all three inspection-style form types.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating inspection rows.
///
/// Defaults to an undamaged `inspecaoVeicular` record submitted by a technician.
pub struct InspectionFactory<'a> {
    db: &'a DatabaseConnection,
    form_type: String,
    container_id: Option<i32>,
    responsible: String,
    verification_date: NaiveDate,
    subject: String,
    status: String,
    damage: bool,
    damage_type: Option<String>,
    corrective_action: Option<String>,
    items: serde_json::Value,
    submitted_by: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl<'a> InspectionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            form_type: "inspecaoVeicular".to_string(),
            container_id: None,
            responsible: "Ana".to_string(),
            verification_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap_or_default(),
            subject: "ABC-1234".to_string(),
            status: "Conforme".to_string(),
            damage: false,
            damage_type: None,
            corrective_action: None,
            items: json!(["Inspeção visual do veículo"]),
            submitted_by: "tecnico@example.com".to_string(),
            role: "tecnico".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = form_type.into();
        self
    }

    pub fn container_id(mut self, container_id: Option<i32>) -> Self {
        self.container_id = container_id;
        self
    }

    pub fn responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    /// Marks the inspection as damaged with the given type and corrective action.
    pub fn damaged(mut self, damage_type: impl Into<String>, action: impl Into<String>) -> Self {
        self.damage = true;
        self.damage_type = Some(damage_type.into());
        self.corrective_action = Some(action.into());
        self
    }

    /// Raw JSON stored in the `items` column.
    pub fn items(mut self, items: serde_json::Value) -> Self {
        self.items = items;
        self
    }

    pub fn submitted_by(mut self, email: impl Into<String>) -> Self {
        self.submitted_by = email.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::inspection::Model, DbErr> {
        entity::inspection::ActiveModel {
            form_type: ActiveValue::Set(self.form_type),
            container_id: ActiveValue::Set(self.container_id),
            responsible: ActiveValue::Set(self.responsible),
            verification_date: ActiveValue::Set(self.verification_date),
            subject: ActiveValue::Set(self.subject),
            status: ActiveValue::Set(self.status),
            damage: ActiveValue::Set(self.damage),
            damage_type: ActiveValue::Set(self.damage_type),
            corrective_action: ActiveValue::Set(self.corrective_action),
            inspection_type: ActiveValue::Set("Rotina".to_string()),
            items: ActiveValue::Set(self.items),
            notes: ActiveValue::Set(None),
            submitted_by: ActiveValue::Set(self.submitted_by),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default inspection of the given form type.
pub async fn create_inspection(
    db: &DatabaseConnection,
    form_type: impl Into<String>,
) -> Result<entity::inspection::Model, DbErr> {
    InspectionFactory::new(db).form_type(form_type).build().await
}
