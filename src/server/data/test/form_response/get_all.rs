use super::*;

/// Tests that responses are listed newest first.
///
/// Expected: Ok(Vec<FormResponse>) ordered by `created_at` descending
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = FormResponseFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newest = FormResponseFactory::new(db).created_at(now).build().await?;
    let middle = FormResponseFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = FormResponseRepository::new(db);
    let responses = repo.get_all().await?;

    let ids: Vec<i32> = responses.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, old.id]);

    Ok(())
}

/// Tests that a row with answers that are not a string map is reported.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_on_malformed_answers() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    FormResponseFactory::new(db)
        .answers(json!(["Sim", "Não"]))
        .build()
        .await?;

    let repo = FormResponseRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
