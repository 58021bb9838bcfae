use super::*;

mod require_manager;
mod require_submission;

/// Tests that a request without a signed-in user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_without_user_in_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_missing_from_database() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(77).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(77)))
    ));

    Ok(())
}

/// Tests that an unrecognised stored role is treated as unauthenticated.
///
/// The check happens before any permission, so even an empty list fails.
///
/// Expected: Err(AuthError::InvalidRole)
#[tokio::test]
async fn fails_for_invalid_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "Gerente").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::InvalidRole(user_id, role))) => {
            assert_eq!(user_id, user.id);
            assert_eq!(role, "Gerente");
        }
        other => panic!("Expected InvalidRole error, got: {:?}", other),
    }

    Ok(())
}

/// Tests that an empty permission list admits any valid role.
///
/// Expected: Ok(SessionUser) with the parsed role
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "auditor").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let session_user = auth_guard.require(&[]).await?;

    assert_eq!(session_user.id, user.id);
    assert_eq!(session_user.email, user.email);
    assert_eq!(session_user.role, Role::Auditor);

    Ok(())
}

/// Tests that every listed permission must be held.
///
/// A technician may submit checklists but not manage containers.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "tecnico").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard
        .require(&[Permission::SubmitChecklist, Permission::ManageContainers])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, user.id);
            assert!(msg.contains("manage containers"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}
