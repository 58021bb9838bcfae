use super::*;

/// Tests that deleting a container keeps its responses and inspections.
///
/// Both records survive with `container_id` cleared.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detaches_records_on_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (container, response, inspection) = create_container_with_records(db).await?;

    let repo = ContainerRepository::new(db);
    let deleted = repo.delete(container.id).await?;
    assert!(deleted);

    assert!(repo.find_by_id(container.id).await?.is_none());

    let response = entity::prelude::FormResponse::find_by_id(response.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(response.container_id, None);
    assert_eq!(response.container_name, container.name);

    let inspection = entity::prelude::Inspection::find_by_id(inspection.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(inspection.container_id, None);

    Ok(())
}

/// Tests deleting a container that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_container() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContainerRepository::new(db);
    let deleted = repo.delete(404).await?;

    assert!(!deleted);

    Ok(())
}
