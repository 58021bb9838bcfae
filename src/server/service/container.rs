//! Container registry operations.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::container::CreateContainerDto,
    server::{
        data::container::ContainerRepository,
        error::AppError,
        model::{
            container::{Container, CreateContainerParam},
            user::SessionUser,
        },
    },
};

pub struct ContainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContainerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every container, newest first.
    pub async fn get_all(&self) -> Result<Vec<Container>, AppError> {
        ContainerRepository::new(self.db).get_all().await
    }

    /// Loads one container.
    ///
    /// # Arguments
    /// - `container_id` - ID of the container to retrieve
    ///
    /// # Returns
    /// - `Ok(Container)` - Container found
    /// - `Err(AppError::NotFound)` - No container with that id
    pub async fn get_by_id(&self, container_id: i32) -> Result<Container, AppError> {
        ContainerRepository::new(self.db)
            .find_by_id(container_id)
            .await?
            .ok_or_else(container_not_found)
    }

    /// Registers a container, recording who created it.
    ///
    /// # Returns
    /// - `Ok(Container)` - Container created
    /// - `Err(AppError::Validation)` - Blank name
    pub async fn create(
        &self,
        payload: CreateContainerDto,
        created_by: &SessionUser,
    ) -> Result<Container, AppError> {
        let payload = payload.validated()?;

        let container = ContainerRepository::new(self.db)
            .create(CreateContainerParam {
                name: payload.name,
                location: payload.location,
                form_type: payload.form_type,
                created_by: created_by.email.clone(),
            })
            .await?;

        tracing::info!(
            "Container {} ({}) created by {}",
            container.id,
            container.form_type.slug(),
            created_by.email
        );

        Ok(container)
    }

    /// Deletes a container, keeping its responses and inspections detached.
    ///
    /// # Returns
    /// - `Ok(())` - Container deleted
    /// - `Err(AppError::NotFound)` - No container with that id
    pub async fn delete(&self, container_id: i32) -> Result<(), AppError> {
        if !ContainerRepository::new(self.db).delete(container_id).await? {
            return Err(container_not_found());
        }

        tracing::info!("Container {} deleted", container_id);

        Ok(())
    }
}

pub(crate) fn container_not_found() -> AppError {
    AppError::NotFound("Container não encontrado.".to_string())
}
