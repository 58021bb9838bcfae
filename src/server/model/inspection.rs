//! Inspection domain model shared by the three inspection-style forms.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        container::FormType,
        inspection::{InspectionDto, ValidInspection},
        role::Role,
    },
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Inspection {
    pub id: i32,
    pub form_type: FormType,
    pub container_id: Option<i32>,
    pub responsible: String,
    pub verification_date: NaiveDate,
    pub subject: String,
    pub status: String,
    pub damage: bool,
    pub damage_type: Option<String>,
    pub corrective_action: Option<String>,
    pub inspection_type: String,
    pub items: Vec<String>,
    pub notes: Option<String>,
    pub submitted_by: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Inspection {
    /// Converts a stored row into the domain model.
    ///
    /// # Returns
    /// - `Ok(Inspection)` - Row decoded
    /// - `Err(AppError::InternalError)` - Unknown or non-inspection `form_type`, or `items` is
    ///   not a JSON array of strings
    pub fn from_entity(entity: entity::inspection::Model) -> Result<Self, AppError> {
        let form_type = FormType::from_slug(&entity.form_type)
            .filter(FormType::is_inspection)
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Inspection {} has unknown form type '{}'",
                    entity.id, entity.form_type
                ))
            })?;

        let items: Vec<String> = serde_json::from_value(entity.items).map_err(|e| {
            AppError::InternalError(format!(
                "Inspection {} has malformed items: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            form_type,
            container_id: entity.container_id,
            responsible: entity.responsible,
            verification_date: entity.verification_date,
            subject: entity.subject,
            status: entity.status,
            damage: entity.damage,
            damage_type: entity.damage_type,
            corrective_action: entity.corrective_action,
            inspection_type: entity.inspection_type,
            items,
            notes: entity.notes,
            submitted_by: entity.submitted_by,
            role: entity.role,
            created_at: entity.created_at,
        })
    }

    /// Converts into the DTO returned by the API.
    pub fn into_dto(self) -> InspectionDto {
        InspectionDto {
            id: self.id,
            form_type: self.form_type,
            container_id: self.container_id,
            responsible: self.responsible,
            verification_date: self.verification_date,
            subject: self.subject,
            status: self.status,
            damage: self.damage,
            damage_type: self.damage_type,
            corrective_action: self.corrective_action,
            inspection_type: self.inspection_type,
            items: self.items,
            notes: self.notes,
            submitted_by: self.submitted_by,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateInspectionParam {
    pub inspection: ValidInspection,
    pub submitted_by: String,
    pub role: Role,
}
