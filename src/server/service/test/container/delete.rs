use super::*;

/// Tests deleting a container that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_container() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ContainerService::new(db).delete(31).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
