use super::*;

/// Tests that blank answers are dropped and the container is snapshotted.
///
/// Expected: Ok(FormResponse) with only the non-blank answer
#[tokio::test]
async fn stores_trimmed_answers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = ContainerFactory::new(db)
        .name("C-77")
        .location(Some("Doca 3".to_string()))
        .build()
        .await?;

    let answers = BTreeMap::from([
        ("q1".to_string(), " sim ".to_string()),
        ("q2".to_string(), "".to_string()),
    ]);

    let response = FormResponseService::new(db)
        .submit(
            CreateFormResponseDto {
                container_id: container.id,
                content: ResponseContent::Answers(answers),
            },
            &technician(),
        )
        .await?;

    assert_eq!(response.container_name, "C-77");
    assert_eq!(response.container_location.as_deref(), Some("Doca 3"));
    assert_eq!(
        response.content,
        ResponseContent::Answers(BTreeMap::from([("q1".to_string(), "sim".to_string())]))
    );
    assert_eq!(response.submitted_by, "tecnico@example.com");
    assert_eq!(response.role, "tecnico");

    Ok(())
}

/// Tests that a checklist with only blank answers is refused.
///
/// Expected: Err(ValidationError::EmptyChecklist)
#[tokio::test]
async fn rejects_empty_checklist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = create_container(db).await?;

    let result = FormResponseService::new(db)
        .submit(
            CreateFormResponseDto {
                container_id: container.id,
                content: ResponseContent::Answers(BTreeMap::from([(
                    "q1".to_string(),
                    "  ".to_string(),
                )])),
            },
            &technician(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::EmptyChecklist))
    ));

    Ok(())
}

/// Tests that answers outside the questionnaire are refused before anything is stored.
///
/// Expected: Err(ValidationError::UnknownQuestion), and no row is written
#[tokio::test]
async fn rejects_unknown_question() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = create_container(db).await?;

    let service = FormResponseService::new(db);
    let result = service
        .submit(
            CreateFormResponseDto {
                container_id: container.id,
                content: ResponseContent::Answers(BTreeMap::from([
                    ("q1".to_string(), "sim".to_string()),
                    ("q99".to_string(), "extra".to_string()),
                ])),
            },
            &technician(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::UnknownQuestion(_)))
    ));
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests submitting against a container registered for another form.
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

    let result = FormResponseService::new(db)
        .submit(
            CreateFormResponseDto {
                container_id: container.id,
                content: ResponseContent::AuditorComment("Ok".to_string()),
            },
            &technician(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::WrongFormType))
    ));

    Ok(())
}

/// Tests submitting against a container that does not exist.
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

    let result = FormResponseService::new(db)
        .submit(
            CreateFormResponseDto {
                container_id: 404,
                content: ResponseContent::AuditorComment("Sem lacre".to_string()),
            },
            &technician(),
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
