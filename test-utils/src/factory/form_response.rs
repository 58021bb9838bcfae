//! Checklist response factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating checklist responses.
///
/// Defaults to a technician's answers `{"q1": "Sim"}` for an unnamed container snapshot.
pub struct FormResponseFactory<'a> {
    db: &'a DatabaseConnection,
    container_id: Option<i32>,
    container_name: String,
    container_location: Option<String>,
    answers: Option<serde_json::Value>,
    auditor_comment: Option<String>,
    submitted_by: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl<'a> FormResponseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            container_id: None,
            container_name: "Container".to_string(),
            container_location: None,
            answers: Some(json!({ "q1": "Sim" })),
            auditor_comment: None,
            submitted_by: "tecnico@example.com".to_string(),
            role: "tecnico".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn container_id(mut self, container_id: Option<i32>) -> Self {
        self.container_id = container_id;
        self
    }

    pub fn container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = name.into();
        self
    }

    /// Replaces the stored answers and clears any auditor comment.
    pub fn answers(mut self, answers: serde_json::Value) -> Self {
        self.answers = Some(answers);
        self.auditor_comment = None;
        self
    }

    /// Stores an auditor comment instead of answers.
    pub fn auditor_comment(mut self, comment: impl Into<String>) -> Self {
        self.auditor_comment = Some(comment.into());
        self.answers = None;
        self.role = "auditor".to_string();
        self
    }

    pub fn submitted_by(mut self, email: impl Into<String>) -> Self {
        self.submitted_by = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::form_response::Model, DbErr> {
        entity::form_response::ActiveModel {
            container_id: ActiveValue::Set(self.container_id),
            container_name: ActiveValue::Set(self.container_name),
            container_location: ActiveValue::Set(self.container_location),
            answers: ActiveValue::Set(self.answers),
            auditor_comment: ActiveValue::Set(self.auditor_comment),
            submitted_by: ActiveValue::Set(self.submitted_by),
            role: ActiveValue::Set(self.role),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default response, optionally linked to a container.
pub async fn create_form_response(
    db: &DatabaseConnection,
    container_id: Option<i32>,
) -> Result<entity::form_response::Model, DbErr> {
    FormResponseFactory::new(db)
        .container_id(container_id)
        .build()
        .await
}
