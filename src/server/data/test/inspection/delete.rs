use super::*;

/// Tests deleting an existing inspection.
///
/// Expected: Ok(true), and the row is gone
#[tokio::test]
async fn deletes_inspection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let inspection = InspectionFactory::new(db)
        .form_type("execucaoManutencao")
        .build()
        .await?;
    let kept = InspectionFactory::new(db).build().await?;

    let repo = InspectionRepository::new(db);
    let deleted = repo.delete(inspection.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(inspection.id).await?.is_none());
    assert!(repo.find_by_id(kept.id).await?.is_some());

    Ok(())
}

/// Tests deleting an inspection that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_inspection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InspectionRepository::new(db);
    let deleted = repo.delete(404).await?;

    assert!(!deleted);

    Ok(())
}
