//! Maintenance execution, vehicle and vessel inspections.

use chrono::NaiveDate;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        container::FormType, inspection::CreateInspectionDto, validation::ValidationError,
    },
    server::{
        data::{container::ContainerRepository, inspection::InspectionRepository},
        error::AppError,
        model::{
            inspection::{CreateInspectionParam, Inspection},
            user::SessionUser,
        },
        service::container::container_not_found,
    },
};

pub struct InspectionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InspectionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores an inspection.
    ///
    /// # Arguments
    /// - `payload` - Submitted form
    /// - `submitted_by` - Signed-in user
    /// - `today` - Current date in São Paulo, bounds the verification year
    ///
    /// # Returns
    /// - `Ok(Inspection)` - Inspection stored
    /// - `Err(AppError::Validation)` - A field check failed, or the linked container uses a
    ///   different form
    /// - `Err(AppError::NotFound)` - The linked container does not exist
    pub async fn submit(
        &self,
        payload: CreateInspectionDto,
        submitted_by: &SessionUser,
        today: NaiveDate,
    ) -> Result<Inspection, AppError> {
        let inspection = payload.validate(today)?;

        if let Some(container_id) = inspection.container_id {
            let container = ContainerRepository::new(self.db)
                .find_by_id(container_id)
                .await?
                .ok_or_else(container_not_found)?;

            if container.form_type != inspection.form_type {
                return Err(ValidationError::WrongFormType.into());
            }
        }

        let inspection = InspectionRepository::new(self.db)
            .create(CreateInspectionParam {
                inspection,
                submitted_by: submitted_by.email.clone(),
                role: submitted_by.role,
            })
            .await?;

        tracing::info!(
            "Inspection {} ({}) submitted by {}",
            inspection.id,
            inspection.form_type.slug(),
            submitted_by.email
        );

        Ok(inspection)
    }

    /// Lists inspections newest first, optionally for one form.
    ///
    /// # Arguments
    /// - `form_type` - Inspection form to keep, or `None` for all of them
    ///
    /// # Returns
    /// - `Ok(Vec<Inspection>)` - Matching inspections
    /// - `Err(AppError)` - Database error, or a stored row that could not be decoded
    pub async fn get_all(&self, form_type: Option<FormType>) -> Result<Vec<Inspection>, AppError> {
        InspectionRepository::new(self.db).get_all(form_type).await
    }

    /// Loads one inspection.
    ///
    /// # Arguments
    /// - `inspection_id` - ID of the inspection to retrieve
    ///
    /// # Returns
    /// - `Ok(Inspection)` - Inspection found
    /// - `Err(AppError::NotFound)` - No inspection with that id
    pub async fn get_by_id(&self, inspection_id: i32) -> Result<Inspection, AppError> {
        InspectionRepository::new(self.db)
            .find_by_id(inspection_id)
            .await?
            .ok_or_else(inspection_not_found)
    }

    /// Deletes an inspection.
    ///
    /// # Arguments
    /// - `inspection_id` - ID of the inspection to delete
    ///
    /// # Returns
    /// - `Ok(())` - Inspection deleted
    /// - `Err(AppError::NotFound)` - No inspection with that id
    pub async fn delete(&self, inspection_id: i32) -> Result<(), AppError> {
        if !InspectionRepository::new(self.db)
            .delete(inspection_id)
            .await?
        {
            return Err(inspection_not_found());
        }

        tracing::info!("Inspection {} deleted", inspection_id);

        Ok(())
    }
}

fn inspection_not_found() -> AppError {
    AppError::NotFound("Inspeção não encontrada.".to_string())
}
