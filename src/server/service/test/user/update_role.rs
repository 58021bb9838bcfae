use super::*;

/// Tests a manager promoting a technician.
///
/// Expected: Ok(User) with role Gerente
#[tokio::test]
async fn promotes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = UserFactory::new(db).role("gerente").build().await?;
    let target = UserFactory::new(db).role("tecnico").build().await?;

    let user = UserService::new(db)
        .update_role(&manager(actor.id), target.id, Role::Gerente)
        .await?;

    assert_eq!(user.role(), Some(Role::Gerente));

    Ok(())
}

/// Tests that a manager cannot demote themselves.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn refuses_self_demotion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let actor = UserFactory::new(db).role("gerente").build().await?;

    let result = UserService::new(db)
        .update_role(&manager(actor.id), actor.id, Role::Tecnico)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .update_role(&manager(1), 999, Role::Auditor)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
