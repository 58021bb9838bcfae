use super::*;

/// Tests storing a vehicle inspection.
///
/// Expected: Ok(Inspection) with the items and damage details preserved
#[tokio::test]
async fn stores_inspection() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = InspectionRepository::new(db);
    let inspection = repo
        .create(CreateInspectionParam {
            inspection: vehicle_inspection(),
            submitted_by: "tecnico@example.com".to_string(),
            role: Role::Tecnico,
        })
        .await?;

    assert_eq!(inspection.form_type, FormType::VehicleInspection);
    assert_eq!(inspection.items, vec!["Pneus", "Faróis"]);
    assert_eq!(inspection.damage_type.as_deref(), Some("Pneu furado"));

    let stored = repo.find_by_id(inspection.id).await?.unwrap();
    assert_eq!(stored.verification_date, inspection.verification_date);
    assert_eq!(stored.items, inspection.items);

    Ok(())
}
