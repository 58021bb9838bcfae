//! Inspection repository for the maintenance, vehicle and vessel checklists.

use crate::{
    model::container::FormType,
    server::{
        error::AppError,
        model::inspection::{CreateInspectionParam, Inspection},
    },
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct InspectionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InspectionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated inspection.
    ///
    /// # Returns
    /// - `Ok(Inspection)` - The stored inspection
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateInspectionParam) -> Result<Inspection, AppError> {
        let inspection = param.inspection;

        let entity = entity::inspection::ActiveModel {
            form_type: ActiveValue::Set(inspection.form_type.slug().to_string()),
            container_id: ActiveValue::Set(inspection.container_id),
            responsible: ActiveValue::Set(inspection.responsible),
            verification_date: ActiveValue::Set(inspection.verification_date),
            subject: ActiveValue::Set(inspection.subject),
            status: ActiveValue::Set(inspection.status),
            damage: ActiveValue::Set(inspection.damage),
            damage_type: ActiveValue::Set(inspection.damage_type),
            corrective_action: ActiveValue::Set(inspection.corrective_action),
            inspection_type: ActiveValue::Set(inspection.inspection_type),
            items: ActiveValue::Set(serde_json::Value::from(inspection.items)),
            notes: ActiveValue::Set(inspection.notes),
            submitted_by: ActiveValue::Set(param.submitted_by),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Inspection::from_entity(entity)
    }

    /// Gets inspections newest first, optionally limited to one form type.
    ///
    /// # Arguments
    /// - `form_type` - Inspection form to keep, or `None` for all three
    ///
    /// # Returns
    /// - `Ok(Vec<Inspection>)` - Matching inspections, newest first
    /// - `Err(AppError::DbErr)` - Database error during the query
    /// - `Err(AppError::InternalError)` - A stored row could not be decoded
    pub async fn get_all(&self, form_type: Option<FormType>) -> Result<Vec<Inspection>, AppError> {
        let mut query = entity::prelude::Inspection::find();

        if let Some(form_type) = form_type {
            query = query.filter(entity::inspection::Column::FormType.eq(form_type.slug()));
        }

        let entities = query
            .order_by_desc(entity::inspection::Column::CreatedAt)
            .order_by_desc(entity::inspection::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Inspection::from_entity).collect()
    }

    /// Finds an inspection by id.
    ///
    /// # Arguments
    /// - `inspection_id` - ID of the inspection to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(..))` - The inspection as a domain model
    /// - `Ok(None)` - No inspection with that id
    /// - `Err(AppError::DbErr)` - Database error during the query
    /// - `Err(AppError::InternalError)` - The stored row could not be decoded
    pub async fn find_by_id(&self, inspection_id: i32) -> Result<Option<Inspection>, AppError> {
        entity::prelude::Inspection::find_by_id(inspection_id)
            .one(self.db)
            .await?
            .map(Inspection::from_entity)
            .transpose()
    }

    /// Deletes an inspection.
    ///
    /// # Arguments
    /// - `inspection_id` - ID of the inspection to delete
    ///
    /// # Returns
    /// - `Ok(true)` - Inspection deleted
    /// - `Ok(false)` - No inspection with that id
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, inspection_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Inspection::delete_by_id(inspection_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
