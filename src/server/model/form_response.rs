//! Container checklist response domain model.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::{
    model::{
        checklist::{FormResponseDto, ResponseContent},
        role::Role,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FormResponse {
    pub id: i32,
    pub container_id: Option<i32>,
    pub container_name: String,
    pub container_location: Option<String>,
    pub content: ResponseContent,
    pub submitted_by: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl FormResponse {
    /// Converts an entity model, checking the row carries answers xor a comment.
    ///
    /// # Returns
    /// - `Err(AppError::InternalError)` - Answers are not a string map, or both/neither
    ///   content columns are set
    pub fn from_entity(entity: entity::form_response::Model) -> Result<Self, AppError> {
        let answers = entity
            .answers
            .map(serde_json::from_value::<BTreeMap<String, String>>)
            .transpose()
            .map_err(|e| {
                AppError::InternalError(format!(
                    "Form response {} has malformed answers: {}",
                    entity.id, e
                ))
            })?;

        let content = ResponseContent::from_columns(answers, entity.auditor_comment)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Form response {} must hold either answers or an auditor comment",
                    entity.id
                ))
            })?;

        Ok(Self {
            id: entity.id,
            container_id: entity.container_id,
            container_name: entity.container_name,
            container_location: entity.container_location,
            content,
            submitted_by: entity.submitted_by,
            role: entity.role,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> FormResponseDto {
        FormResponseDto {
            id: self.id,
            container_id: self.container_id,
            container_name: self.container_name,
            container_location: self.container_location,
            content: self.content,
            submitted_by: self.submitted_by,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Parameters for storing a response. The container name and location are snapshots taken at
/// submission time.
#[derive(Debug, Clone)]
pub struct CreateFormResponseParam {
    pub container_id: i32,
    pub container_name: String,
    pub container_location: Option<String>,
    pub content: ResponseContent,
    pub submitted_by: String,
    pub role: Role,
}
