use super::*;

/// Tests filtering inspections by form type.
///
/// Expected: Ok(Vec<Inspection>) holding only vessel inspections, newest first
#[tokio::test]
async fn filters_by_form_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = InspectionFactory::new(db)
        .form_type("inspecaoEmbarcacao")
        .created_at(now - Duration::hours(3))
        .build()
        .await?;
    InspectionFactory::new(db)
        .form_type("inspecaoVeicular")
        .build()
        .await?;
    let newer = InspectionFactory::new(db)
        .form_type("inspecaoEmbarcacao")
        .created_at(now)
        .build()
        .await?;

    let repo = InspectionRepository::new(db);
    let inspections = repo.get_all(Some(FormType::VesselInspection)).await?;

    let ids: Vec<i32> = inspections.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests listing every inspection when no form type is given.
///
/// Expected: Ok(Vec<Inspection>) with all rows
#[tokio::test]
async fn lists_all_without_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    InspectionFactory::new(db)
        .form_type("execucaoManutencao")
        .build()
        .await?;
    InspectionFactory::new(db).build().await?;

    let repo = InspectionRepository::new(db);
    let inspections = repo.get_all(None).await?;

    assert_eq!(inspections.len(), 2);

    Ok(())
}
