//! Container checklist responses.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        checklist::CreateFormResponseDto, container::FormType, validation::ValidationError,
    },
    server::{
        data::{container::ContainerRepository, form_response::FormResponseRepository},
        error::AppError,
        model::{
            form_response::{CreateFormResponseParam, FormResponse},
            user::SessionUser,
        },
        service::container::container_not_found,
    },
};

pub struct FormResponseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FormResponseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores answers or an auditor comment for a container checklist.
    ///
    /// The container's current name and location are copied onto the response so it stays
    /// readable after the container is deleted. Which roles may submit which content is
    /// checked by the caller.
    ///
    /// # Returns
    /// - `Ok(FormResponse)` - Response stored
    /// - `Err(AppError::Validation)` - No non-blank answer or comment, or the container does
    ///   not use the container checklist
    /// - `Err(AppError::NotFound)` - No container with that id
    pub async fn submit(
        &self,
        payload: CreateFormResponseDto,
        submitted_by: &SessionUser,
    ) -> Result<FormResponse, AppError> {
        let content = payload.content.validated()?;

        let container = ContainerRepository::new(self.db)
            .find_by_id(payload.container_id)
            .await?
            .ok_or_else(container_not_found)?;

        if container.form_type != FormType::ContainerChecklist {
            return Err(ValidationError::WrongFormType.into());
        }

        let response = FormResponseRepository::new(self.db)
            .create(CreateFormResponseParam {
                container_id: container.id,
                container_name: container.name,
                container_location: container.location,
                content,
                submitted_by: submitted_by.email.clone(),
                role: submitted_by.role,
            })
            .await?;

        tracing::info!(
            "Response {} for container {} submitted by {}",
            response.id,
            container.id,
            submitted_by.email
        );

        Ok(response)
    }

    /// Lists every response, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<FormResponse>)` - All responses, including those of deleted containers
    /// - `Err(AppError)` - Database error, or a stored row that could not be decoded
    pub async fn get_all(&self) -> Result<Vec<FormResponse>, AppError> {
        FormResponseRepository::new(self.db).get_all().await
    }

    /// Loads one response.
    ///
    /// # Arguments
    /// - `response_id` - ID of the response to retrieve
    ///
    /// # Returns
    /// - `Ok(FormResponse)` - Response found
    /// - `Err(AppError::NotFound)` - No response with that id
    pub async fn get_by_id(&self, response_id: i32) -> Result<FormResponse, AppError> {
        FormResponseRepository::new(self.db)
            .find_by_id(response_id)
            .await?
            .ok_or_else(response_not_found)
    }

    /// Deletes a response.
    ///
    /// # Arguments
    /// - `response_id` - ID of the response to delete
    ///
    /// # Returns
    /// - `Ok(())` - Response deleted
    /// - `Err(AppError::NotFound)` - No response with that id
    pub async fn delete(&self, response_id: i32) -> Result<(), AppError> {
        if !FormResponseRepository::new(self.db)
            .delete(response_id)
            .await?
        {
            return Err(response_not_found());
        }

        tracing::info!("Response {} deleted", response_id);

        Ok(())
    }
}

fn response_not_found() -> AppError {
    AppError::NotFound("Resposta não encontrada.".to_string())
}
