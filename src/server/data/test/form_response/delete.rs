use super::*;

/// Tests deleting a response.
///
/// Expected: Ok(true) then Ok(false) on a second attempt
#[tokio::test]
async fn deletes_response_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_checklist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = FormResponseFactory::new(db).build().await?;

    let repo = FormResponseRepository::new(db);
    assert!(repo.delete(response.id).await?);
    assert!(!repo.delete(response.id).await?);
    assert!(repo.find_by_id(response.id).await?.is_none());

    Ok(())
}
