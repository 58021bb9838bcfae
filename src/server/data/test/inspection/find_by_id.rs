use super::*;

/// Tests loading a stored inspection by id.
///
/// Expected: Ok(Some(Inspection)) with the form type and items decoded
#[tokio::test]
async fn finds_inspection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = InspectionFactory::new(db)
        .form_type("inspecaoEmbarcacao")
        .items(serde_json::json!(["Casco", "Coletes salva-vidas"]))
        .damaged("Casco riscado", "Informado")
        .build()
        .await?;

    let repo = InspectionRepository::new(db);
    let inspection = repo.find_by_id(stored.id).await?.unwrap();

    assert_eq!(inspection.form_type, FormType::VesselInspection);
    assert_eq!(inspection.items, vec!["Casco", "Coletes salva-vidas"]);
    assert!(inspection.damage);
    assert_eq!(inspection.corrective_action.as_deref(), Some("Informado"));

    Ok(())
}

/// Tests that a missing id is not an error.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_inspection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InspectionRepository::new(db);

    assert!(repo.find_by_id(404).await?.is_none());

    Ok(())
}

/// Tests that a row whose items column is not a list of strings is rejected.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn rejects_malformed_items() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = InspectionFactory::new(db)
        .items(serde_json::json!({ "Pneus": true }))
        .build()
        .await?;

    let repo = InspectionRepository::new(db);
    let result = repo.find_by_id(stored.id).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}

/// Tests that rows with an unknown or non-inspection form type are rejected.
///
/// `containerForm` belongs to the response table and is refused here as well.
///
/// Expected: Err(AppError::InternalError) for both rows, also when listing
#[tokio::test]
async fn rejects_unknown_form_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let unknown = InspectionFactory::new(db)
        .form_type("inspecaoAerea")
        .build()
        .await?;
    let container_checklist = InspectionFactory::new(db)
        .form_type("containerForm")
        .build()
        .await?;

    let repo = InspectionRepository::new(db);

    assert!(matches!(
        repo.find_by_id(unknown.id).await,
        Err(AppError::InternalError(_))
    ));
    assert!(matches!(
        repo.find_by_id(container_checklist.id).await,
        Err(AppError::InternalError(_))
    ));
    assert!(matches!(
        repo.get_all(None).await,
        Err(AppError::InternalError(_))
    ));

    Ok(())
}
