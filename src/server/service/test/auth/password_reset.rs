use super::*;

/// Tests replacing a password with a reset token.
///
/// Expected: Ok(()) and the new password verifies; the token is then spent
#[tokio::test]
async fn resets_password_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("tecnico@example.com")
        .build()
        .await?;

    let codes = OneTimeCodeService::new();
    let token = codes.issue_reset_token(user.id).await;
    let service = AuthService::new(db, &codes);

    service.confirm_password_reset(&token, "novasenha").await?;

    let session_user = service
        .login_with_password("tecnico@example.com", "novasenha")
        .await?;
    assert_eq!(session_user.id, user.id);

    let reused = service.confirm_password_reset(&token, "outrasenha").await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidResetToken))
    ));

    Ok(())
}

/// Tests that a short password is rejected without spending the token.
///
/// Expected: Err(ValidationError::PasswordTooShort) then Ok(()) with a valid password
#[tokio::test]
async fn short_password_keeps_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let codes = OneTimeCodeService::new();
    let token = codes.issue_reset_token(user.id).await;
    let service = AuthService::new(db, &codes);

    let result = service.confirm_password_reset(&token, "123").await;
    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::PasswordTooShort(6)))
    ));

    service.confirm_password_reset(&token, "123456").await?;

    Ok(())
}

/// Tests that an unknown e-mail gets the same answer as a known one.
///
/// Expected: Ok(())
#[tokio::test]
async fn unknown_email_request_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = OneTimeCodeService::new();
    AuthService::new(db, &codes)
        .request_password_reset("ninguem@example.com", "http://localhost:8080")
        .await?;

    Ok(())
}
