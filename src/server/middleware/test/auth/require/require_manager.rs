use super::*;

const MANAGER_PERMISSIONS: [Permission; 4] = [
    Permission::ManageContainers,
    Permission::ViewResponses,
    Permission::ManageResponses,
    Permission::ManageUsers,
];

/// Tests that a manager holds every management permission.
///
/// Expected: Ok(SessionUser) with role Gerente
#[tokio::test]
async fn grants_management_to_manager() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user_with_role(db, "gerente").await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let session_user = auth_guard.require(&MANAGER_PERMISSIONS).await?;

    assert_eq!(session_user.role, Role::Gerente);

    Ok(())
}

/// Tests that technicians and auditors are denied each management permission.
///
/// Expected: Err(AuthError::AccessDenied) for every permission
#[tokio::test]
async fn denies_management_to_other_roles() -> Result<(), AppError> {
    for role in ["tecnico", "auditor"] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::user::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let auth_guard = AuthGuard::new(db, session);
        for permission in MANAGER_PERMISSIONS {
            let result = auth_guard.require(&[permission]).await;

            assert!(
                matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))),
                "{} should be denied {:?}",
                role,
                permission
            );
        }
    }

    Ok(())
}
