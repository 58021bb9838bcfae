use super::*;

/// Tests storing technician answers with a snapshot of the container.
///
/// Expected: Ok(FormResponse) with answers and no comment
#[tokio::test]
async fn stores_answers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = create_container(db).await?;
    let answers = BTreeMap::from([
        ("q1".to_string(), "sim".to_string()),
        ("q3".to_string(), "4".to_string()),
    ]);

    let repo = FormResponseRepository::new(db);
    let response = repo
        .create(CreateFormResponseParam {
            container_id: container.id,
            container_name: container.name.clone(),
            container_location: Some("Pátio B".to_string()),
            content: ResponseContent::Answers(answers.clone()),
            submitted_by: "tecnico@example.com".to_string(),
            role: Role::Tecnico,
        })
        .await?;

    assert_eq!(response.container_id, Some(container.id));
    assert_eq!(response.container_location.as_deref(), Some("Pátio B"));
    assert_eq!(response.content, ResponseContent::Answers(answers));
    assert_eq!(response.role, "tecnico");

    Ok(())
}

/// Tests storing an auditor comment.
///
/// Expected: Ok(FormResponse) holding only the comment
#[tokio::test]
async fn stores_auditor_comment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let container = create_container(db).await?;

    let repo = FormResponseRepository::new(db);
    let response = repo
        .create(CreateFormResponseParam {
            container_id: container.id,
            container_name: container.name,
            container_location: None,
            content: ResponseContent::AuditorComment("Lacre rompido".to_string()),
            submitted_by: "auditor@example.com".to_string(),
            role: Role::Auditor,
        })
        .await?;

    assert!(response.content.is_auditor_comment());

    let stored = repo.find_by_id(response.id).await?.unwrap();
    assert_eq!(
        stored.content,
        ResponseContent::AuditorComment("Lacre rompido".to_string())
    );

    Ok(())
}
