use super::*;

/// Tests that containers are listed newest first.
///
/// Expected: Ok(Vec<Container>) in reverse creation order
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Container)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = ContainerFactory::new(db).name("C-01").build().await?;
    let second = ContainerFactory::new(db).name("C-02").build().await?;

    let repo = ContainerRepository::new(db);
    let containers = repo.get_all().await?;

    let ids: Vec<i32> = containers.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests that a stored form type outside the known slugs is reported.
///
/// Expected: Err(AppError::InternalError)
#[tokio::test]
async fn fails_on_unknown_form_type() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Container)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ContainerFactory::new(db).form_type("planilha").build().await?;

    let repo = ContainerRepository::new(db);
    let result = repo.get_all().await;

    assert!(matches!(result, Err(AppError::InternalError(_))));

    Ok(())
}
