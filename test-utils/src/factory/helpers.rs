//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a container together with one checklist response and one inspection pointing at it.
///
/// Useful for exercising container deletion, which must detach both kinds of record.
///
/// # Returns
/// - `Ok((container, response, inspection))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_container_with_records(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::container::Model,
        entity::form_response::Model,
        entity::inspection::Model,
    ),
    DbErr,
> {
    let container = crate::factory::container::create_container(db).await?;
    let response = crate::factory::form_response::FormResponseFactory::new(db)
        .container_id(Some(container.id))
        .container_name(container.name.clone())
        .build()
        .await?;
    let inspection = crate::factory::inspection::InspectionFactory::new(db)
        .container_id(Some(container.id))
        .build()
        .await?;

    Ok((container, response, inspection))
}
