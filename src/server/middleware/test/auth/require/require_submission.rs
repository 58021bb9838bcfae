use super::*;

/// Tests checklist submission access per role.
///
/// Expected: managers and technicians pass, auditors get AccessDenied
#[tokio::test]
async fn checklist_submission_by_role() -> Result<(), AppError> {
    for (role, allowed) in [("gerente", true), ("tecnico", true), ("auditor", false)] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::user::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session)
            .require(&[Permission::SubmitChecklist])
            .await;

        assert_eq!(result.is_ok(), allowed, "role {}", role);
    }

    Ok(())
}

/// Tests auditor comment access per role.
///
/// Expected: managers and auditors pass, technicians get AccessDenied
#[tokio::test]
async fn auditor_comment_by_role() -> Result<(), AppError> {
    for (role, allowed) in [("gerente", true), ("tecnico", false), ("auditor", true)] {
        let mut test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let (db, session) = test.db_and_session().await.unwrap();

        let user = factory::user::create_user_with_role(db, role).await?;
        AuthSession::new(session).set_user_id(user.id).await?;

        let result = AuthGuard::new(db, session)
            .require(&[Permission::SubmitAuditorComment])
            .await;

        assert_eq!(result.is_ok(), allowed, "role {}", role);
    }

    Ok(())
}
