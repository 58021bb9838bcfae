use super::*;

/// Tests detecting an existing manager account.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_manager_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).role("gerente").build().await?;

    let repo = UserRepository::new(db);
    assert!(repo.manager_exists().await?);

    Ok(())
}

/// Tests that technicians, auditors and unknown roles do not count as managers.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_without_manager() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).role("tecnico").build().await?;
    UserFactory::new(db).role("auditor").build().await?;
    UserFactory::new(db).role("Gerente").build().await?;

    let repo = UserRepository::new(db);
    assert!(!repo.manager_exists().await?);

    Ok(())
}
