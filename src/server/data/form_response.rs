//! Container checklist response repository.

use crate::{
    model::checklist::ResponseContent,
    server::{
        error::AppError,
        model::form_response::{CreateFormResponseParam, FormResponse},
    },
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

pub struct FormResponseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormResponseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a response holding either checklist answers or an auditor comment.
    ///
    /// # Returns
    /// - `Ok(FormResponse)` - The stored response
    /// - `Err(AppError::DbErr)` - Database error during insert
    /// - `Err(AppError::InternalError)` - Answers could not be serialised
    pub async fn create(&self, param: CreateFormResponseParam) -> Result<FormResponse, AppError> {
        let (answers, auditor_comment) = match param.content {
            ResponseContent::Answers(answers) => (
                Some(serde_json::to_value(answers).map_err(|e| {
                    AppError::InternalError(format!("Failed to serialise answers: {}", e))
                })?),
                None,
            ),
            ResponseContent::AuditorComment(comment) => (None, Some(comment)),
        };

        let entity = entity::form_response::ActiveModel {
            container_id: ActiveValue::Set(Some(param.container_id)),
            container_name: ActiveValue::Set(param.container_name),
            container_location: ActiveValue::Set(param.container_location),
            answers: ActiveValue::Set(answers),
            auditor_comment: ActiveValue::Set(auditor_comment),
            submitted_by: ActiveValue::Set(param.submitted_by),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        FormResponse::from_entity(entity)
    }

    /// Gets every response, newest first.
    pub async fn get_all(&self) -> Result<Vec<FormResponse>, AppError> {
        let entities = entity::prelude::FormResponse::find()
            .order_by_desc(entity::form_response::Column::CreatedAt)
            .order_by_desc(entity::form_response::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(FormResponse::from_entity).collect()
    }

    /// Finds a response by id.
    ///
    /// # Arguments
    /// - `response_id` - ID of the response to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(..))` - The response as a domain model
    /// - `Ok(None)` - No response with that id
    /// - `Err(AppError::DbErr)` - Database error during the query
    /// - `Err(AppError::InternalError)` - The stored row could not be decoded
    pub async fn find_by_id(&self, response_id: i32) -> Result<Option<FormResponse>, AppError> {
        entity::prelude::FormResponse::find_by_id(response_id)
            .one(self.db)
            .await?
            .map(FormResponse::from_entity)
            .transpose()
    }

    /// Deletes a response.
    ///
    /// # Returns
    /// - `Ok(true)` - Response deleted
    /// - `Ok(false)` - No response with that id
    pub async fn delete(&self, response_id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::FormResponse::delete_by_id(response_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
