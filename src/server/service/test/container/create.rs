use super::*;

/// Tests registering a container with trimmed fields.
///
/// Expected: Ok(Container) recording the creator's e-mail
#[tokio::test]
async fn creates_container() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Container)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = SessionUser {
        id: 1,
        email: "gerente@example.com".to_string(),
        name: "Gerente".to_string(),
        role: Role::Gerente,
    };

    let container = ContainerService::new(db)
        .create(
            CreateContainerDto {
                name: "  Container 12 ".to_string(),
                location: Some(" ".to_string()),
                form_type: FormType::ContainerChecklist,
            },
            &manager,
        )
        .await?;

    assert_eq!(container.name, "Container 12");
    assert_eq!(container.location, None);
    assert_eq!(container.created_by, "gerente@example.com");

    Ok(())
}

/// Tests that a blank name is refused.
///
/// Expected: Err(ValidationError::MissingContainerName)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Container)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = SessionUser {
        id: 1,
        email: "gerente@example.com".to_string(),
        name: "Gerente".to_string(),
        role: Role::Gerente,
    };

    let result = ContainerService::new(db)
        .create(
            CreateContainerDto {
                name: "   ".to_string(),
                location: None,
                form_type: FormType::VehicleInspection,
            },
            &manager,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::MissingContainerName))
    ));

    Ok(())
}
