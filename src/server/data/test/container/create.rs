use super::*;

/// Tests creating a container for the vessel inspection form.
///
/// Expected: Ok(Container) with the form type stored as its slug
#[tokio::test]
async fn creates_container() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Container)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ContainerRepository::new(db);
    let container = repo
        .create(CreateContainerParam {
            name: "Balsa 07".to_string(),
            location: None,
            form_type: FormType::VesselInspection,
            created_by: "gerente@example.com".to_string(),
        })
        .await?;

    assert_eq!(container.name, "Balsa 07");
    assert_eq!(container.form_type, FormType::VesselInspection);

    let stored = entity::prelude::Container::find_by_id(container.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.form_type, "inspecaoEmbarcacao");

    Ok(())
}
