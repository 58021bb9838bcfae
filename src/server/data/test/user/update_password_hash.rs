use super::*;

/// Tests setting a password for an account that only used one-time codes.
///
/// Expected: Ok(true) and the new hash stored
#[tokio::test]
async fn sets_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update_password_hash(user.id, "$argon2id$new".to_string())
        .await?;
    assert!(updated);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash.as_deref(), Some("$argon2id$new"));

    Ok(())
}

/// Tests updating the password of a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update_password_hash(42, "$argon2id$new".to_string())
        .await?;

    assert!(!updated);

    Ok(())
}
