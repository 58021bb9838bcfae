use super::*;

/// Tests signing in with an issued login code, which then cannot be reused.
///
/// Expected: Ok(SessionUser) then Err(AuthError::InvalidCode)
#[tokio::test]
async fn code_signs_in_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("auditor@example.com")
        .role("auditor")
        .build()
        .await?;

    let codes = OneTimeCodeService::new();
    let code = codes.issue_login_code("auditor@example.com").await;
    let service = AuthService::new(db, &codes);

    let session_user = service
        .verify_login_code(" AUDITOR@example.com", &code)
        .await?;
    assert_eq!(session_user.id, user.id);
    assert_eq!(session_user.role, Role::Auditor);

    let reused = service.verify_login_code("auditor@example.com", &code).await;
    assert!(matches!(
        reused,
        Err(AppError::AuthErr(AuthError::InvalidCode))
    ));

    Ok(())
}

/// Tests that requesting a code for an unknown e-mail succeeds without issuing anything.
///
/// Expected: Ok(()) and no code accepted afterwards
#[tokio::test]
async fn unknown_email_request_is_silent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = OneTimeCodeService::new();
    let service = AuthService::new(db, &codes);

    service.request_login_code("ninguem@example.com").await?;

    let result = service
        .verify_login_code("ninguem@example.com", "000000")
        .await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCode))
    ));

    Ok(())
}

/// Tests that a malformed e-mail is rejected when requesting a code.
///
/// Expected: Err(ValidationError::InvalidEmail)
#[tokio::test]
async fn malformed_email_request_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let codes = OneTimeCodeService::new();
    let result = AuthService::new(db, &codes)
        .request_login_code("sem-arroba")
        .await;

    assert!(matches!(
        result,
        Err(AppError::Validation(ValidationError::InvalidEmail))
    ));

    Ok(())
}
