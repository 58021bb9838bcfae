use super::*;

/// Tests signing in with the right password and a differently-cased e-mail.
///
/// Expected: Ok(SessionUser)
#[tokio::test]
async fn signs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("gerente@example.com")
        .role("gerente")
        .password_hash(hash_password("segredo1").await?)
        .build()
        .await?;

    let codes = OneTimeCodeService::new();
    let session_user = AuthService::new(db, &codes)
        .login_with_password("Gerente@Example.com", "segredo1")
        .await?;

    assert_eq!(session_user.id, user.id);
    assert_eq!(session_user.role, Role::Gerente);

    Ok(())
}

/// Tests that a wrong password, an unknown e-mail and a missing hash look the same.
///
/// Expected: Err(AuthError::InvalidCredentials) in every case
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("tecnico@example.com")
        .password_hash(hash_password("segredo1").await?)
        .build()
        .await?;
    UserFactory::new(db)
        .email("semsenha@example.com")
        .build()
        .await?;

    let codes = OneTimeCodeService::new();
    let service = AuthService::new(db, &codes);

    for (email, password) in [
        ("tecnico@example.com", "errada"),
        ("ninguem@example.com", "segredo1"),
        ("semsenha@example.com", ""),
    ] {
        let result = service.login_with_password(email, password).await;
        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidCredentials))),
            "{} should be rejected",
            email
        );
    }

    Ok(())
}

/// Tests that the right password does not help an account with an invalid role.
///
/// Expected: Err(AuthError::InvalidRole)
#[tokio::test]
async fn rejects_invalid_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db)
        .email("antigo@example.com")
        .role("admin")
        .password_hash(hash_password("segredo1").await?)
        .build()
        .await?;

    let codes = OneTimeCodeService::new();
    let result = AuthService::new(db, &codes)
        .login_with_password("antigo@example.com", "segredo1")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidRole(_, _)))
    ));

    Ok(())
}
