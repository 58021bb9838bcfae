//! Container data repository.
//!
//! Containers are never edited after creation. Deleting one detaches its checklist responses
//! and inspections instead of removing them.

use crate::server::{
    error::AppError,
    model::container::{Container, CreateContainerParam},
};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

pub struct ContainerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContainerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a container.
    ///
    /// # Returns
    /// - `Ok(Container)` - The created container
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateContainerParam) -> Result<Container, AppError> {
        let entity = entity::container::ActiveModel {
            name: ActiveValue::Set(param.name),
            location: ActiveValue::Set(param.location),
            form_type: ActiveValue::Set(param.form_type.slug().to_string()),
            created_by: ActiveValue::Set(param.created_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Container::from_entity(entity)
    }

    /// Gets every container, newest first.
    pub async fn get_all(&self) -> Result<Vec<Container>, AppError> {
        let entities = entity::prelude::Container::find()
            .order_by_desc(entity::container::Column::CreatedAt)
            .order_by_desc(entity::container::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Container::from_entity).collect()
    }

    /// Finds a container by id.
    ///
    /// # Arguments
    /// - `container_id` - ID of the container to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(..))` - The container as a domain model
    /// - `Ok(None)` - No container with that id
    /// - `Err(AppError::DbErr)` - Database error during the query
    /// - `Err(AppError::InternalError)` - The stored row could not be decoded
    pub async fn find_by_id(&self, container_id: i32) -> Result<Option<Container>, AppError> {
        entity::prelude::Container::find_by_id(container_id)
            .one(self.db)
            .await?
            .map(Container::from_entity)
            .transpose()
    }

    /// Deletes a container and detaches the records pointing at it.
    ///
    /// `container_id` is cleared on form responses and inspections in the same transaction
    /// as the delete, so history survives with its name snapshot.
    ///
    /// # Returns
    /// - `Ok(true)` - Container deleted
    /// - `Ok(false)` - No container with that id
    /// - `Err(AppError::DbErr)` - Database error; nothing was changed
    pub async fn delete(&self, container_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::FormResponse::update_many()
            .filter(entity::form_response::Column::ContainerId.eq(container_id))
            .col_expr(
                entity::form_response::Column::ContainerId,
                Expr::value(Option::<i32>::None),
            )
            .exec(&txn)
            .await?;

        entity::prelude::Inspection::update_many()
            .filter(entity::inspection::Column::ContainerId.eq(container_id))
            .col_expr(
                entity::inspection::Column::ContainerId,
                Expr::value(Option::<i32>::None),
            )
            .exec(&txn)
            .await?;

        let result = entity::prelude::Container::delete_by_id(container_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
