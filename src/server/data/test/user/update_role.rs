use super::*;

/// Tests replacing an invalid stored role with a valid one.
///
/// Expected: Ok(Some(User)) with the new role
#[tokio::test]
async fn fixes_invalid_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).role("supervisor").build().await?;

    let repo = UserRepository::new(db);
    let updated = repo.update_role(user.id, Role::Tecnico).await?;

    assert_eq!(updated.and_then(|u| u.role()), Some(Role::Tecnico));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo.update_role(999, Role::Gerente).await?;

    assert!(updated.is_none());

    Ok(())
}
