use super::*;

/// Tests storing an inspection linked to a matching container.
///
/// Damage details are dropped when no damage is reported.
///
/// Expected: Ok(Inspection)
#[tokio::test]
async fn stores_linked_inspection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = ContainerFactory::new(db)
        .form_type("inspecaoEmbarcacao")
        .build()
        .await?;

    let inspection = InspectionService::new(db)
        .submit(vessel_inspection(Some(container.id)), &technician(), today())
        .await?;

    assert_eq!(inspection.container_id, Some(container.id));
    assert_eq!(inspection.damage_type, None);
    assert_eq!(inspection.notes, None);
    assert_eq!(
        inspection.verification_date,
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    );

    Ok(())
}

/// Tests that a verification year beyond next year is refused.
///
/// Expected: Err(ValidationError::InvalidVerificationDate)
#[tokio::test]
async fn rejects_future_year() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut payload = vessel_inspection(None);
    payload.verification_date = "2028-01-01".to_string();

    let result = InspectionService::new(db)
        .submit(payload, &technician(), today())
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::InvalidVerificationDate))
    ));

    Ok(())
}

/// Tests that reported damage needs its type and corrective action.
///
/// Expected: Err(ValidationError::MissingDamageDetails)
#[tokio::test]
async fn rejects_damage_without_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut payload = vessel_inspection(None);
    payload.damage = true;
    payload.corrective_action = Some("Corrigido".to_string());
    payload.damage_type = None;

    let result = InspectionService::new(db)
        .submit(payload, &technician(), today())
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::MissingDamageDetails))
    ));

    Ok(())
}

/// Tests linking an inspection to a container registered for another form.
///
/// Expected: Err(ValidationError::WrongFormType)
#[tokio::test]
async fn rejects_container_of_other_form() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = ContainerFactory::new(db)
        .form_type("inspecaoVeicular")
        .build()
        .await?;

    let result = InspectionService::new(db)
        .submit(vessel_inspection(Some(container.id)), &technician(), today())
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::WrongFormType))
    ));

    Ok(())
}
